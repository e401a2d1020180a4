use super::*;

// =============================================================
// page_title
// =============================================================

#[test]
fn page_title_for_dashboard_root() {
    assert_eq!(page_title("/"), Some("Dashboard"));
}

#[test]
fn page_title_for_users() {
    assert_eq!(page_title("/users"), Some("User Management"));
}

#[test]
fn page_title_for_students() {
    assert_eq!(page_title("/students"), Some("Student Management"));
}

#[test]
fn page_title_unknown_path_is_none() {
    assert_eq!(page_title("/nowhere"), None);
}

#[test]
fn page_title_requires_exact_match() {
    assert_eq!(page_title("/users/42"), None);
}

#[test]
fn registered_paths_without_title_render_none() {
    assert_eq!(page_title("/reports"), None);
    assert_eq!(page_title("/settings"), None);
}

// =============================================================
// in_group
// =============================================================

#[test]
fn ecommerce_children_belong_to_ecommerce() {
    for path in ["/products", "/orders", "/customers"] {
        assert!(in_group(path, SidebarGroup::Ecommerce), "{path}");
        assert!(!in_group(path, SidebarGroup::Authentication), "{path}");
    }
}

#[test]
fn auth_children_belong_to_authentication() {
    for path in ["/login", "/register", "/lock"] {
        assert!(in_group(path, SidebarGroup::Authentication), "{path}");
    }
}

#[test]
fn top_level_links_belong_to_no_group() {
    assert!(!in_group("/", SidebarGroup::Ecommerce));
    assert!(!in_group("/users", SidebarGroup::Authentication));
    assert!(!in_group("/unknown", SidebarGroup::Ecommerce));
}
