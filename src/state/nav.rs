//! Route descriptors: page titles and sidebar-group membership.
//!
//! DESIGN
//! ======
//! One table consulted per navigation replaces scattered string
//! comparisons against the current path in navbar and sidebar code.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Collapsible sidebar groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarGroup {
    Ecommerce,
    Authentication,
}

/// Descriptor for a path the shell knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    /// Navbar heading; routes without one render an empty title slot.
    pub title: Option<&'static str>,
    /// Sidebar group this path keeps expanded while active.
    pub group: Option<SidebarGroup>,
}

const ROUTES: &[RouteMeta] = &[
    RouteMeta { path: "/", title: Some("Dashboard"), group: None },
    RouteMeta { path: "/users", title: Some("User Management"), group: None },
    RouteMeta { path: "/students", title: Some("Student Management"), group: None },
    RouteMeta { path: "/reports", title: None, group: None },
    RouteMeta { path: "/settings", title: None, group: None },
    RouteMeta { path: "/projects", title: None, group: None },
    RouteMeta { path: "/products", title: None, group: Some(SidebarGroup::Ecommerce) },
    RouteMeta { path: "/orders", title: None, group: Some(SidebarGroup::Ecommerce) },
    RouteMeta { path: "/customers", title: None, group: Some(SidebarGroup::Ecommerce) },
    RouteMeta { path: "/login", title: None, group: Some(SidebarGroup::Authentication) },
    RouteMeta { path: "/register", title: None, group: Some(SidebarGroup::Authentication) },
    RouteMeta { path: "/lock", title: None, group: Some(SidebarGroup::Authentication) },
];

/// Exact-match descriptor lookup.
pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|meta| meta.path == path)
}

/// Navbar title for `path`; unknown paths get none.
pub fn page_title(path: &str) -> Option<&'static str> {
    route_meta(path).and_then(|meta| meta.title)
}

/// Whether `path` belongs to `group`; drives submenu expansion.
pub fn in_group(path: &str, group: SidebarGroup) -> bool {
    route_meta(path).is_some_and(|meta| meta.group == Some(group))
}
