use super::*;

fn draft() -> RegisterDraft {
    RegisterDraft {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
    }
}

#[test]
fn mismatched_passwords_fail_before_any_request_is_built() {
    let mut d = draft();
    d.confirm_password = "different".to_owned();
    assert_eq!(build_register_request(&d), Err("Passwords do not match"));
}

#[test]
fn matching_passwords_build_a_request() {
    let request = build_register_request(&draft()).unwrap();
    assert_eq!(request.first_name, "Jane");
    assert_eq!(request.last_name, "Doe");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.password, "secret");
}

#[test]
fn new_accounts_default_to_active_user() {
    let request = build_register_request(&draft()).unwrap();
    assert_eq!(request.role, "User");
    assert_eq!(request.status, "Active");
}

#[test]
fn empty_passwords_that_match_still_pass_local_validation() {
    // HTML `required` is the only guard against empty fields.
    let mut d = draft();
    d.password = String::new();
    d.confirm_password = String::new();
    assert!(build_register_request(&d).is_ok());
}
