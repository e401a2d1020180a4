use super::*;

#[test]
fn link_class_marks_exact_match_active() {
    assert_eq!(link_class("/users", "/users"), "nav-link nav-link--active");
}

#[test]
fn link_class_leaves_other_paths_plain() {
    assert_eq!(link_class("/users", "/students"), "nav-link");
    // Root must not light up while a child route is active.
    assert_eq!(link_class("/users", "/"), "nav-link");
}
