use super::*;

#[test]
fn login_failure_message_is_exact() {
    // The view must show this exact string for any failed attempt; backend
    // detail never reaches the user here.
    assert_eq!(LOGIN_FAILED, "Invalid email or password");
}
