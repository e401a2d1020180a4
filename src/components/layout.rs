//! Authenticated shell: sidebar + top bar wrapping routed page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route renders inside this shell, which also owns the
//! route guard: whenever the session has no token it redirects to
//! `/login`. The guard re-runs on session changes, so signing out
//! anywhere bounces immediately.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn Shell() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();

    let navigate = use_navigate();
    Effect::new(move || {
        if !session.has_token() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div
            class="overlay"
            class:overlay--active=move || ui.get().sidebar_open
            on:click=move |_| ui.update(|u| u.sidebar_open = false)
        ></div>

        <div class="wrapper">
            <Sidebar/>
            <div class="content">
                <Navbar/>
                <div class="content__body">
                    <Outlet/>
                </div>
            </div>
        </div>
    }
}
