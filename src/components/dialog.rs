//! Modal dialog shell shared by form and confirmation dialogs.

use leptos::prelude::*;

/// Centered dialog over a click-to-cancel backdrop. Clicks inside the
/// dialog body do not propagate to the backdrop.
#[component]
pub fn Dialog(
    #[prop(into)] title: Signal<String>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{move || title.get()}</h2>
                {children()}
            </div>
        </div>
    }
}
