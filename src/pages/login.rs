//! Login page: credential form storing the issued token in the session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::net::types::LoginRequest;
use crate::state::session::Session;

/// Shown for any login failure; the backend detail is only logged.
const LOGIN_FAILED: &str = "Invalid email or password";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    // Captured for the form; nothing consumes it yet.
    let remember = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth::login(&request).await {
                Ok(response) => {
                    session.set_token(&response.token);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("login failed: {e}");
                    error.set(Some(LOGIN_FAILED.to_owned()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, navigate, session);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__heading">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account to continue"</p>

                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="auth-form__row">
                        <label class="auth-form__remember">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| remember.set(event_target_checked(&ev))
                            />
                            "Remember password"
                        </label>
                        <a href="#" class="auth-form__forgot">
                            "Forgot password?"
                        </a>
                    </div>

                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
