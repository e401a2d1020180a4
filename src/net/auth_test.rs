use super::*;

#[test]
fn register_error_message_prefers_body_text() {
    assert_eq!(register_error_message("email already registered"), "email already registered");
}

#[test]
fn register_error_message_falls_back_when_body_blank() {
    assert_eq!(register_error_message(""), "Registration failed");
    assert_eq!(register_error_message("  "), "Registration failed");
}
