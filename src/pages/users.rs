//! User management page: fetch, filter, table, and CRUD dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the users fetch/filter/mutate cycle over the generic
//! entity-list machine; table chrome and the dialog shell come from
//! `components`. Every successful mutation refetches the whole
//! collection.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::entity_table::{Column, EntityTable, Record};
use crate::net::types::{CreateUserRequest, UpdateUserRequest, User};
use crate::state::entity_list::{EntityList, FieldFilter, apply_filters};
use crate::state::session::Session;
use crate::util::names;

#[cfg(feature = "hydrate")]
use crate::net::users;

/// Shown when the list fetch fails; the raw error is only logged.
const LOAD_FAILED: &str = "Failed to load users. Please try again later.";
/// Shown inside the form dialog when create/update fails.
const SAVE_FAILED: &str = "Failed to save user";
/// Password submitted when the add form leaves the field blank.
const DEFAULT_PASSWORD: &str = "DefaultPassword123!";

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Modal form draft. The edited name stays flat; it is split back into
/// first/last only when the request is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub password: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            role: "User".to_owned(),
            status: "Active".to_owned(),
            password: String::new(),
        }
    }
}

impl UserDraft {
    /// Seed the form from an existing row; the password is always blanked.
    fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status.clone(),
            password: String::new(),
        }
    }
}

/// Create payload: split the edited full name and fall back to the default
/// password when the field was left blank.
fn build_create_request(draft: &UserDraft) -> CreateUserRequest {
    let (first_name, last_name) = names::split_full_name(&draft.full_name);
    CreateUserRequest {
        first_name,
        last_name,
        email: draft.email.clone(),
        password: if draft.password.is_empty() {
            DEFAULT_PASSWORD.to_owned()
        } else {
            draft.password.clone()
        },
        role: draft.role.clone(),
        status: draft.status.clone(),
    }
}

/// Update payload: the password travels only when changed.
fn build_update_request(draft: &UserDraft) -> UpdateUserRequest {
    let (first_name, last_name) = names::split_full_name(&draft.full_name);
    UpdateUserRequest {
        first_name,
        last_name,
        email: draft.email.clone(),
        role: draft.role.clone(),
        status: draft.status.clone(),
        password: (!draft.password.is_empty()).then(|| draft.password.clone()),
    }
}

/// Banner text for a failed delete, carrying whatever detail is available.
fn delete_failed_message(detail: &str) -> String {
    if detail.is_empty() {
        "Failed to delete user: Unknown error".to_owned()
    } else {
        format!("Failed to delete user: {detail}")
    }
}

fn role_of(user: &User) -> &str {
    &user.role
}

fn status_of(user: &User) -> &str {
    &user.status
}

fn role_badge(role: &str) -> &'static str {
    match role {
        "Admin" => "badge--danger",
        "Editor" => "badge--info",
        _ => "badge--secondary",
    }
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "Active" => "badge--success",
        "Inactive" => "badge--secondary",
        _ => "badge--warning",
    }
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column { header: "Name", value: |u: &User| u.full_name.clone(), badge: None },
        Column { header: "Email", value: |u: &User| u.email.clone(), badge: None },
        Column { header: "Role", value: |u: &User| u.role.clone(), badge: Some(role_badge) },
        Column { header: "Status", value: |u: &User| u.status.clone(), badge: Some(status_badge) },
    ]
}

/// Fetch the collection into `list`, mapping failure to the static
/// message.
#[cfg(feature = "hydrate")]
async fn load_users_into(session: Session, list: RwSignal<EntityList<User>>) {
    match users::list_users(&session).await {
        Ok(items) => list.update(|l| l.loaded(items)),
        Err(e) => {
            log::error!("fetching users failed: {e}");
            list.update(|l| l.load_failed(LOAD_FAILED));
        }
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let list = RwSignal::new(EntityList::<User>::default());
    let search = RwSignal::new(String::new());
    let role_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    // Banner for delete failures; load failures live in the list phase.
    let action_error = RwSignal::new(None::<String>);

    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let draft = RwSignal::new(UserDraft::default());
    let form_error = RwSignal::new(None::<String>);

    let delete_id = RwSignal::new(None::<String>);

    let refetch = move || {
        list.update(EntityList::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_users_into(session, list));
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        refetch();
    });

    let filtered = Memo::new(move |_| {
        list.with(|l| {
            apply_filters(
                &l.items,
                &[
                    FieldFilter { field: role_of, selected: role_filter.get() },
                    FieldFilter { field: status_of, selected: status_filter.get() },
                ],
            )
        })
    });

    let on_add = move |_| {
        editing_id.set(None);
        draft.set(UserDraft::default());
        form_error.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |user: User| {
        editing_id.set(Some(user.id.clone()));
        draft.set(UserDraft::from_user(&user));
        form_error.set(None);
        show_form.set(true);
    });

    let on_delete_request = Callback::new(move |id: String| delete_id.set(Some(id)));
    let on_form_cancel = Callback::new(move |()| show_form.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="entity-page">
            <div class="filter-bar">
                <label class="filter-bar__field filter-bar__field--search">
                    "Search"
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Name, email, or ID..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </label>
                <label class="filter-bar__field">
                    "Role"
                    <select
                        class="filter-bar__input"
                        prop:value=move || role_filter.get()
                        on:change=move |ev| role_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All Roles"</option>
                        <option value="Admin">"Admin"</option>
                        <option value="Editor">"Editor"</option>
                        <option value="User">"User"</option>
                    </select>
                </label>
                <label class="filter-bar__field">
                    "Status"
                    <select
                        class="filter-bar__input"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All Status"</option>
                        <option value="Active">"Active"</option>
                        <option value="Inactive">"Inactive"</option>
                        <option value="Pending">"Pending"</option>
                    </select>
                </label>
                <span class="filter-bar__spacer"></span>
                <button class="btn btn--primary" on:click=on_add>
                    "+ Add User"
                </button>
            </div>

            <Show when=move || list.with(|l| l.error().is_some())>
                <p class="entity-page__error">
                    {move || list.with(|l| l.error().map(str::to_owned).unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || action_error.get().is_some()>
                <p class="entity-page__error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !list.with(EntityList::is_loading)
                fallback=move || view! { <p class="entity-page__loading">"Loading users..."</p> }
            >
                <EntityTable
                    rows=filtered
                    columns=user_columns()
                    search=search
                    on_edit=on_edit
                    on_delete=on_delete_request
                />
            </Show>

            <Show when=move || show_form.get()>
                <UserFormDialog
                    draft=draft
                    editing_id=editing_id
                    error=form_error
                    list=list
                    on_cancel=on_form_cancel
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteUserDialog
                    delete_id=delete_id
                    list=list
                    action_error=action_error
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormTab {
    Details,
    MenuRights,
}

/// Modal form for adding or editing a user. On success the collection is
/// refetched before the dialog closes; on failure the dialog stays open
/// with the save-failure message.
#[component]
fn UserFormDialog(
    draft: RwSignal<UserDraft>,
    editing_id: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    list: RwSignal<EntityList<User>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let saving = RwSignal::new(false);
    let tab = RwSignal::new(FormTab::Details);

    let submit = move |_| {
        if saving.get() {
            return;
        }
        saving.set(true);
        error.set(None);
        let current = draft.get_untracked();
        let editing = editing_id.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => users::update_user(&session, id, &build_update_request(&current)).await,
                None => users::create_user(&session, &build_create_request(&current)).await,
            };
            match result {
                Ok(()) => {
                    // Refetch before closing so the table reflects the write.
                    list.update(EntityList::begin_load);
                    load_users_into(session, list).await;
                    saving.set(false);
                    on_cancel.run(());
                }
                Err(e) => {
                    log::error!("saving user failed: {e}");
                    error.set(Some(SAVE_FAILED.to_owned()));
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, editing, session, list);
            saving.set(false);
        }
    };

    let title = Signal::derive(move || {
        if editing_id.get().is_some() {
            "Edit User".to_owned()
        } else {
            "Add New User".to_owned()
        }
    });

    view! {
        <Dialog title=title on_cancel=on_cancel>
            <div class="dialog__tabs">
                <button
                    class="dialog__tab"
                    class:dialog__tab--active=move || tab.get() == FormTab::Details
                    on:click=move |_| tab.set(FormTab::Details)
                >
                    "User Details"
                </button>
                <button
                    class="dialog__tab"
                    class:dialog__tab--active=move || tab.get() == FormTab::MenuRights
                    on:click=move |_| tab.set(FormTab::MenuRights)
                >
                    "Menu Rights"
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || tab.get() == FormTab::Details>
                <div class="dialog__grid">
                    <label class="dialog__label">
                        "Full Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.get().full_name
                            on:input=move |ev| {
                                draft.update(|d| d.full_name = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Role"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.get().role
                            on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                        >
                            <option value="User">"User"</option>
                            <option value="Editor">"Editor"</option>
                            <option value="Admin">"Admin"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.get().status
                            on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                        >
                            <option value="Active">"Active"</option>
                            <option value="Inactive">"Inactive"</option>
                            <option value="Pending">"Pending"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || draft.get().password
                            on:input=move |ev| {
                                draft.update(|d| d.password = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>
            </Show>
            <Show when=move || tab.get() == FormTab::MenuRights>
                <div class="dialog__placeholder">
                    <p>"Menu access configuration will appear here."</p>
                </div>
            </Show>

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" disabled=move || saving.get() on:click=submit>
                    "Save"
                </button>
            </div>
        </Dialog>
    }
}

/// Delete confirmation. Confirming closes the dialog, issues the delete,
/// and refetches; failures land in the page-level banner.
#[component]
fn DeleteUserDialog(
    delete_id: RwSignal<Option<String>>,
    list: RwSignal<EntityList<User>>,
    action_error: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();

    let submit = move |_| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match users::delete_user(&session, &id).await {
                Ok(()) => {
                    action_error.set(None);
                    list.update(EntityList::begin_load);
                    load_users_into(session, list).await;
                }
                Err(e) => {
                    log::error!("deleting user failed: {e}");
                    action_error.set(Some(delete_failed_message(&e.to_string())));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, list, action_error);
        on_cancel.run(());
    };

    view! {
        <Dialog title=Signal::derive(|| "Delete User".to_owned()) on_cancel=on_cancel>
            <p class="dialog__danger">"Are you sure you want to delete this user?"</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--danger" on:click=submit>
                    "Delete"
                </button>
            </div>
        </Dialog>
    }
}
