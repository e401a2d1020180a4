//! Fixed sidebar navigation with collapsible sub-menu groups.
//!
//! Group expansion derives from the current route (a child route keeps its
//! group open) with a manual toggle layered on top. Plain anchors are
//! intercepted by the router for client-side navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{self, SidebarGroup};
use crate::state::ui::UiState;

/// Link class mirroring the active route.
fn link_class(current: &str, path: &str) -> &'static str {
    if current == path {
        "nav-link nav-link--active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let path = Memo::new(move |_| location.pathname.get());

    let commerce_open = RwSignal::new(false);
    let auth_open = RwSignal::new(false);

    let commerce_active = move || nav::in_group(&path.get(), SidebarGroup::Ecommerce);
    let auth_active = move || nav::in_group(&path.get(), SidebarGroup::Authentication);
    let commerce_expanded = move || commerce_open.get() || commerce_active();
    let auth_expanded = move || auth_open.get() || auth_active();

    view! {
        <nav id="sidebar" class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <div class="sidebar__header">
                <h3 class="sidebar__brand">"Admin"</h3>
            </div>

            <ul class="sidebar__menu">
                <li>
                    <a href="/" class=move || link_class(&path.get(), "/")>
                        "Dashboard"
                    </a>
                </li>
                <li>
                    <a href="/users" class=move || link_class(&path.get(), "/users")>
                        "Users"
                    </a>
                </li>
                <li>
                    <a href="/students" class=move || link_class(&path.get(), "/students")>
                        "Students"
                    </a>
                </li>
                <li>
                    <a href="/reports" class=move || link_class(&path.get(), "/reports")>
                        "Reports"
                    </a>
                </li>
                <li>
                    <a href="/settings" class=move || link_class(&path.get(), "/settings")>
                        "Settings"
                    </a>
                </li>

                <li class="sidebar__group" class:sidebar__group--active=commerce_active>
                    <button
                        class="nav-link sidebar__group-toggle"
                        on:click=move |_| commerce_open.update(|open| *open = !*open)
                        aria-expanded=move || commerce_expanded().to_string()
                    >
                        "E-commerce"
                        <span class="sidebar__chevron">
                            {move || if commerce_expanded() { "▾" } else { "▸" }}
                        </span>
                    </button>
                    <Show when=commerce_expanded>
                        <ul class="sidebar__submenu">
                            <li>
                                <a href="/products" class=move || link_class(&path.get(), "/products")>
                                    "Products"
                                </a>
                            </li>
                            <li>
                                <a href="/orders" class=move || link_class(&path.get(), "/orders")>
                                    "Orders"
                                </a>
                            </li>
                            <li>
                                <a href="/customers" class=move || link_class(&path.get(), "/customers")>
                                    "Customers"
                                </a>
                            </li>
                        </ul>
                    </Show>
                </li>

                <li class="sidebar__group" class:sidebar__group--active=auth_active>
                    <button
                        class="nav-link sidebar__group-toggle"
                        on:click=move |_| auth_open.update(|open| *open = !*open)
                        aria-expanded=move || auth_expanded().to_string()
                    >
                        "Authentication"
                        <span class="sidebar__chevron">
                            {move || if auth_expanded() { "▾" } else { "▸" }}
                        </span>
                    </button>
                    <Show when=auth_expanded>
                        <ul class="sidebar__submenu">
                            <li>
                                <a href="/login" class=move || link_class(&path.get(), "/login")>
                                    "Login"
                                </a>
                            </li>
                            <li>
                                <a href="/register" class=move || link_class(&path.get(), "/register")>
                                    "Register"
                                </a>
                            </li>
                            <li>
                                <a href="/lock" class=move || link_class(&path.get(), "/lock")>
                                    "Lock Screen"
                                </a>
                            </li>
                        </ul>
                    </Show>
                </li>

                <li>
                    <a href="/projects" class=move || link_class(&path.get(), "/projects")>
                        "Projects"
                    </a>
                </li>
            </ul>
        </nav>
    }
}
