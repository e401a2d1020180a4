//! Registration page: local confirm-password check, then account creation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::net::types::CreateUserRequest;

/// Form fields captured by the registration view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Client-side validation and request assembly. A password mismatch fails
/// before any network call. New accounts are submitted with role `User`
/// and status `Active`; the backend may override.
fn build_register_request(draft: &RegisterDraft) -> Result<CreateUserRequest, &'static str> {
    if draft.password != draft.confirm_password {
        return Err("Passwords do not match");
    }
    Ok(CreateUserRequest {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        email: draft.email.clone(),
        password: draft.password.clone(),
        role: "User".to_owned(),
        status: "Active".to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let draft = RwSignal::new(RegisterDraft::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        let request = match build_register_request(&draft.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                busy.set(false);
                return;
            }
        };
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth::register(&request).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Registration successful! Please login.");
                    }
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("registration failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__heading">"Create Account"</h1>
                <p class="auth-card__subtitle">"Sign up to get started"</p>

                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "First Name"
                            <input
                                class="auth-input"
                                type="text"
                                required
                                prop:value=move || draft.get().first_name
                                on:input=move |ev| {
                                    draft.update(|d| d.first_name = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="auth-form__label">
                            "Last Name"
                            <input
                                class="auth-input"
                                type="text"
                                required
                                prop:value=move || draft.get().last_name
                                on:input=move |ev| {
                                    draft.update(|d| d.last_name = event_target_value(&ev));
                                }
                            />
                        </label>
                    </div>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            required
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            required
                            prop:value=move || draft.get().password
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-input"
                            type="password"
                            required
                            prop:value=move || draft.get().confirm_password
                            on:input=move |ev| {
                                draft.update(|d| d.confirm_password = event_target_value(&ev));
                            }
                        />
                    </label>

                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>

                    <p class="auth-card__footer">
                        "Already have an account? " <a href="/login">"Sign In"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
