use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn users_endpoint_formats_expected_path() {
    assert_eq!(users_endpoint(), "/api/Users");
    assert_eq!(user_endpoint("u-123"), "/api/Users/u-123");
}

#[test]
fn students_endpoint_formats_expected_path() {
    assert_eq!(students_endpoint(), "/api/Students");
    assert_eq!(student_endpoint("s-9"), "/api/Students/s-9");
}

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(login_endpoint(), "/api/Auth/login");
    assert_eq!(register_endpoint(), "/api/Auth/register");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn status_error_message_prefers_body_text() {
    assert_eq!(status_error_message(409, "email already taken"), "email already taken");
}

#[test]
fn status_error_message_defaults_when_body_blank() {
    assert_eq!(status_error_message(404, ""), "HTTP error! status: 404");
    assert_eq!(status_error_message(500, "  \n"), "HTTP error! status: 500");
}

#[test]
fn api_error_display_is_the_message() {
    let err = ApiError::Http {
        status: 404,
        message: "HTTP error! status: 404".to_owned(),
    };
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}
