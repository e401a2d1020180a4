use super::*;

// =============================================================
// User wire mapping
// =============================================================

#[test]
fn api_user_deserializes_camel_case_fields() {
    let raw: ApiUser = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "role": "Admin",
        "status": "Active"
    }))
    .unwrap();
    assert_eq!(raw.first_name, "Jane");
    assert_eq!(raw.last_name, "Doe");
}

#[test]
fn user_view_model_flattens_name() {
    let raw: ApiUser = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "role": "Editor",
        "status": "Pending"
    }))
    .unwrap();
    let user = User::from(raw);
    assert_eq!(user.full_name, "Jane Doe");
    assert_eq!(user.role, "Editor");
    assert_eq!(user.status, "Pending");
}

#[test]
fn user_view_model_defaults_missing_role_and_status() {
    let raw: ApiUser = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "firstName": "Sam",
        "lastName": "Lee",
        "email": "sam@example.com"
    }))
    .unwrap();
    let user = User::from(raw);
    assert_eq!(user.role, "User");
    assert_eq!(user.status, "Active");
}

#[test]
fn create_user_request_serializes_camel_case() {
    let request = CreateUserRequest {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret".to_owned(),
        role: "User".to_owned(),
        status: "Active".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "password": "secret",
            "role": "User",
            "status": "Active"
        })
    );
}

#[test]
fn update_user_request_omits_unchanged_password() {
    let request = UpdateUserRequest {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        role: "User".to_owned(),
        status: "Active".to_owned(),
        password: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("password").is_none());
}

#[test]
fn update_user_request_carries_changed_password() {
    let request = UpdateUserRequest {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        role: "User".to_owned(),
        status: "Active".to_owned(),
        password: Some("new-secret".to_owned()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["password"], "new-secret");
}

// =============================================================
// Student wire mapping
// =============================================================

#[test]
fn api_student_accepts_lowercase_id() {
    let raw: ApiStudent = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "firstName": "Ada",
        "lastName": "Byron",
        "email": "ada@example.com",
        "grade": "Grade 11",
        "status": "Active"
    }))
    .unwrap();
    assert_eq!(raw.id, "s-1");
}

#[test]
fn api_student_accepts_capitalized_id() {
    let raw: ApiStudent = serde_json::from_value(serde_json::json!({
        "Id": "s-2",
        "firstName": "Ada",
        "lastName": "Byron",
        "email": "ada@example.com"
    }))
    .unwrap();
    assert_eq!(raw.id, "s-2");
}

#[test]
fn api_student_accepts_student_id_spelling() {
    let raw: ApiStudent = serde_json::from_value(serde_json::json!({
        "studentID": "s-3",
        "firstName": "Ada",
        "lastName": "Byron",
        "email": "ada@example.com"
    }))
    .unwrap();
    assert_eq!(raw.id, "s-3");
}

#[test]
fn api_student_missing_id_defaults_to_empty() {
    let raw: ApiStudent = serde_json::from_value(serde_json::json!({
        "firstName": "Ada",
        "lastName": "Byron",
        "email": "ada@example.com"
    }))
    .unwrap();
    assert_eq!(raw.id, "");
}

#[test]
fn student_view_model_defaults_grade_and_status() {
    let raw: ApiStudent = serde_json::from_value(serde_json::json!({
        "id": "s-4",
        "firstName": "Ada",
        "lastName": "Byron",
        "email": "ada@example.com"
    }))
    .unwrap();
    let student = Student::from(raw);
    assert_eq!(student.full_name, "Ada Byron");
    assert_eq!(student.grade, "N/A");
    assert_eq!(student.status, "Active");
}

#[test]
fn update_student_request_has_no_password_field() {
    let request = UpdateStudentRequest {
        first_name: "Ada".to_owned(),
        last_name: "Byron".to_owned(),
        email: "ada@example.com".to_owned(),
        grade: "Grade 12".to_owned(),
        status: "Active".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("password").is_none());
    assert_eq!(value["grade"], "Grade 12");
}

// =============================================================
// Login payloads
// =============================================================

#[test]
fn login_response_deserializes_token_and_user() {
    let response: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt-abc",
        "expiration": "2026-09-01T00:00:00Z",
        "user": {
            "id": "u-1",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "role": "Admin",
            "status": "Active"
        }
    }))
    .unwrap();
    assert_eq!(response.token, "jwt-abc");
    assert_eq!(response.user.first_name, "Jane");
}

#[test]
fn login_request_serializes_plain_fields() {
    let request = LoginRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}
