//! Student management page: fetch, filter, table, and CRUD dialogs.
//!
//! Same cycle as the users page with a grade field instead of
//! role/password; new drafts default to Grade 10.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::entity_table::{Column, EntityTable, Record};
use crate::net::types::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::state::entity_list::{EntityList, FieldFilter, apply_filters};
use crate::state::session::Session;
use crate::util::names;

#[cfg(feature = "hydrate")]
use crate::net::students;

/// Shown when the list fetch fails; the raw error is only logged.
const LOAD_FAILED: &str = "Failed to load students. Please try again later.";
/// Shown inside the form dialog when create/update fails.
const SAVE_FAILED: &str = "Failed to save student";

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Modal form draft for the student dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentDraft {
    pub full_name: String,
    pub email: String,
    pub grade: String,
    pub status: String,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            grade: "Grade 10".to_owned(),
            status: "Active".to_owned(),
        }
    }
}

impl StudentDraft {
    fn from_student(student: &Student) -> Self {
        Self {
            full_name: student.full_name.clone(),
            email: student.email.clone(),
            grade: student.grade.clone(),
            status: student.status.clone(),
        }
    }
}

fn build_create_request(draft: &StudentDraft) -> CreateStudentRequest {
    let (first_name, last_name) = names::split_full_name(&draft.full_name);
    CreateStudentRequest {
        first_name,
        last_name,
        email: draft.email.clone(),
        grade: draft.grade.clone(),
        status: draft.status.clone(),
    }
}

fn build_update_request(draft: &StudentDraft) -> UpdateStudentRequest {
    let (first_name, last_name) = names::split_full_name(&draft.full_name);
    UpdateStudentRequest {
        first_name,
        last_name,
        email: draft.email.clone(),
        grade: draft.grade.clone(),
        status: draft.status.clone(),
    }
}

/// Banner text for a failed delete, carrying whatever detail is available.
fn delete_failed_message(detail: &str) -> String {
    if detail.is_empty() {
        "Failed to delete student: Unknown error".to_owned()
    } else {
        format!("Failed to delete student: {detail}")
    }
}

fn grade_of(student: &Student) -> &str {
    &student.grade
}

fn status_of(student: &Student) -> &str {
    &student.status
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "Active" => "badge--success",
        "Inactive" => "badge--secondary",
        _ => "badge--warning",
    }
}

fn student_columns() -> Vec<Column<Student>> {
    vec![
        Column { header: "Name", value: |s: &Student| s.full_name.clone(), badge: None },
        Column { header: "Email", value: |s: &Student| s.email.clone(), badge: None },
        Column { header: "Grade", value: |s: &Student| s.grade.clone(), badge: None },
        Column { header: "Status", value: |s: &Student| s.status.clone(), badge: Some(status_badge) },
    ]
}

#[cfg(feature = "hydrate")]
async fn load_students_into(session: Session, list: RwSignal<EntityList<Student>>) {
    match students::list_students(&session).await {
        Ok(items) => list.update(|l| l.loaded(items)),
        Err(e) => {
            log::error!("fetching students failed: {e}");
            list.update(|l| l.load_failed(LOAD_FAILED));
        }
    }
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let list = RwSignal::new(EntityList::<Student>::default());
    let search = RwSignal::new(String::new());
    let grade_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    let action_error = RwSignal::new(None::<String>);

    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let draft = RwSignal::new(StudentDraft::default());
    let form_error = RwSignal::new(None::<String>);

    let delete_id = RwSignal::new(None::<String>);

    let refetch = move || {
        list.update(EntityList::begin_load);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_students_into(session, list));
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
                    FieldFilter { field: grade_of, selected: grade_filter.get() },
                    FieldFilter { field: status_of, selected: status_filter.get() },
                ],
            )
        })
    });

    let on_add = move |_| {
        editing_id.set(None);
        draft.set(StudentDraft::default());
        form_error.set(None);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |student: Student| {
        editing_id.set(Some(student.id.clone()));
        draft.set(StudentDraft::from_student(&student));
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
                    "Grade"
                    <select
                        class="filter-bar__input"
                        prop:value=move || grade_filter.get()
                        on:change=move |ev| grade_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All Grades"</option>
                        <option value="Grade 9">"Grade 9"</option>
                        <option value="Grade 10">"Grade 10"</option>
                        <option value="Grade 11">"Grade 11"</option>
                        <option value="Grade 12">"Grade 12"</option>
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
                    "+ Add Student"
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
                fallback=move || view! { <p class="entity-page__loading">"Loading students..."</p> }
            >
                <EntityTable
                    rows=filtered
                    columns=student_columns()
                    search=search
                    on_edit=on_edit
                    on_delete=on_delete_request
                />
            </Show>

            <Show when=move || show_form.get()>
                <StudentFormDialog
                    draft=draft
                    editing_id=editing_id
                    error=form_error
                    list=list
                    on_cancel=on_form_cancel
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteStudentDialog
                    delete_id=delete_id
                    list=list
                    action_error=action_error
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

/// Modal form for adding or editing a student.
#[component]
fn StudentFormDialog(
    draft: RwSignal<StudentDraft>,
    editing_id: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    list: RwSignal<EntityList<Student>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let saving = RwSignal::new(false);

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
                Some(id) => {
                    students::update_student(&session, id, &build_update_request(&current)).await
                }
                None => students::create_student(&session, &build_create_request(&current)).await,
            };
            match result {
                Ok(()) => {
                    list.update(EntityList::begin_load);
                    load_students_into(session, list).await;
                    saving.set(false);
                    on_cancel.run(());
                }
                Err(e) => {
                    log::error!("saving student failed: {e}");
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
            "Edit Student".to_owned()
        } else {
            "Add New Student".to_owned()
        }
    });

    view! {
        <Dialog title=title on_cancel=on_cancel>
            <Show when=move || error.get().is_some()>
                <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="dialog__grid">
                <label class="dialog__label">
                    "Full Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.get().full_name
                        on:input=move |ev| draft.update(|d| d.full_name = event_target_value(&ev))
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
                    "Grade"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.get().grade
                        on:change=move |ev| draft.update(|d| d.grade = event_target_value(&ev))
                    >
                        <option value="Grade 9">"Grade 9"</option>
                        <option value="Grade 10">"Grade 10"</option>
                        <option value="Grade 11">"Grade 11"</option>
                        <option value="Grade 12">"Grade 12"</option>
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
            </div>

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

/// Delete confirmation for a student row.
#[component]
fn DeleteStudentDialog(
    delete_id: RwSignal<Option<String>>,
    list: RwSignal<EntityList<Student>>,
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
            match students::delete_student(&session, &id).await {
                Ok(()) => {
                    action_error.set(None);
                    list.update(EntityList::begin_load);
                    load_students_into(session, list).await;
                }
                Err(e) => {
                    log::error!("deleting student failed: {e}");
                    action_error.set(Some(delete_failed_message(&e.to_string())));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, list, action_error);
        on_cancel.run(());
    };

    view! {
        <Dialog title=Signal::derive(|| "Delete Student".to_owned()) on_cancel=on_cancel>
            <p class="dialog__danger">"Are you sure you want to delete this student?"</p>
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
