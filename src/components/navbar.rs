//! Top bar: page title, sidebar toggle, profile menu, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::nav;
use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = StoredValue::new(use_navigate());
    let menu_open = RwSignal::new(false);

    let title = move || nav::page_title(&location.pathname.get()).unwrap_or_default();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu_open.set(false);
        session.clear_token();
        navigate.get_value()("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <button
                class="btn navbar__toggle"
                title="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                "☰"
            </button>
            <h5 class="navbar__title">{title}</h5>
            <span class="navbar__spacer"></span>

            <div class="navbar__profile">
                <button
                    class="navbar__profile-button"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="navbar__avatar">"JD"</span>
                    <span class="navbar__profile-name">"John Doe"</span>
                </button>
                <Show when=move || menu_open.get()>
                    // Full-viewport transparent layer: any outside click
                    // lands here and closes the menu.
                    <div class="navbar__menu-backdrop" on:click=move |_| menu_open.set(false)></div>
                    <ul class="navbar__menu">
                        <li>
                            <a
                                href="/profile"
                                class="navbar__menu-item"
                                on:click=move |_| menu_open.set(false)
                            >
                                "Profile"
                            </a>
                        </li>
                        <li>
                            <a
                                href="/settings"
                                class="navbar__menu-item"
                                on:click=move |_| menu_open.set(false)
                            >
                                "Settings"
                            </a>
                        </li>
                        <li class="navbar__menu-divider"></li>
                        <li>
                            <a
                                href="#"
                                class="navbar__menu-item navbar__menu-item--danger"
                                on:click=on_logout
                            >
                                "Sign Out"
                            </a>
                        </li>
                    </ul>
                </Show>
            </div>
        </nav>
    }
}
