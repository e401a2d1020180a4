use super::*;

fn draft() -> UserDraft {
    UserDraft {
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        role: "Editor".to_owned(),
        status: "Pending".to_owned(),
        password: String::new(),
    }
}

// =============================================================
// Draft defaults and seeding
// =============================================================

#[test]
fn default_draft_is_plain_active_user() {
    let draft = UserDraft::default();
    assert_eq!(draft.role, "User");
    assert_eq!(draft.status, "Active");
    assert!(draft.full_name.is_empty());
    assert!(draft.password.is_empty());
}

#[test]
fn from_user_blanks_the_password() {
    let user = User {
        id: "u-1".to_owned(),
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        role: "Admin".to_owned(),
        status: "Active".to_owned(),
    };
    let draft = UserDraft::from_user(&user);
    assert_eq!(draft.full_name, "Jane Doe");
    assert!(draft.password.is_empty());
}

// =============================================================
// Request builders
// =============================================================

#[test]
fn create_request_splits_full_name() {
    let request = build_create_request(&draft());
    assert_eq!(request.first_name, "Jane");
    assert_eq!(request.last_name, "Doe");
    assert_eq!(request.role, "Editor");
    assert_eq!(request.status, "Pending");
}

#[test]
fn create_request_falls_back_to_default_password() {
    let request = build_create_request(&draft());
    assert_eq!(request.password, "DefaultPassword123!");
}

#[test]
fn create_request_keeps_entered_password() {
    let mut d = draft();
    d.password = "hunter2".to_owned();
    assert_eq!(build_create_request(&d).password, "hunter2");
}

#[test]
fn create_request_single_word_name_boundary() {
    let mut d = draft();
    d.full_name = "Madonna".to_owned();
    let request = build_create_request(&d);
    assert_eq!(request.first_name, "Madonna");
    assert_eq!(request.last_name, ".");
}

#[test]
fn update_request_omits_blank_password() {
    let request = build_update_request(&draft());
    assert_eq!(request.password, None);
}

#[test]
fn update_request_carries_changed_password() {
    let mut d = draft();
    d.password = "new-secret".to_owned();
    assert_eq!(build_update_request(&d).password.as_deref(), Some("new-secret"));
}

// =============================================================
// Messages and badges
// =============================================================

#[test]
fn delete_failed_message_includes_detail() {
    assert_eq!(
        delete_failed_message("HTTP error! status: 404"),
        "Failed to delete user: HTTP error! status: 404"
    );
}

#[test]
fn delete_failed_message_without_detail() {
    assert_eq!(delete_failed_message(""), "Failed to delete user: Unknown error");
}

#[test]
fn role_badges_distinguish_privilege_levels() {
    assert_eq!(role_badge("Admin"), "badge--danger");
    assert_eq!(role_badge("Editor"), "badge--info");
    assert_eq!(role_badge("User"), "badge--secondary");
}

#[test]
fn status_badges_cover_all_states() {
    assert_eq!(status_badge("Active"), "badge--success");
    assert_eq!(status_badge("Inactive"), "badge--secondary");
    assert_eq!(status_badge("Pending"), "badge--warning");
}
