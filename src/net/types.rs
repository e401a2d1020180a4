//! Wire DTOs for the admin REST API and their flattened view models.
//!
//! DESIGN
//! ======
//! The backend stores names split and serializes camelCase; the UI works
//! with flat records carrying a single display name. Mapping lives here so
//! pages never see wire field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::names;

/// Credentials for `POST /Auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token expiry as reported by the backend; not enforced client-side.
    pub expiration: String,
    pub user: ApiUser,
}

/// A user record as the backend serializes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Absent on some rows; the view model defaults it.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Flattened user row as the tables render it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl From<ApiUser> for User {
    fn from(raw: ApiUser) -> Self {
        Self {
            id: raw.id,
            full_name: names::join_name(&raw.first_name, &raw.last_name),
            email: raw.email,
            role: raw.role.unwrap_or_else(|| "User".to_owned()),
            status: raw.status.unwrap_or_else(|| "Active".to_owned()),
        }
    }
}

/// Body for `POST /Users` and `POST /Auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub status: String,
}

/// Body for `PUT /Users/{id}`. The password travels only when changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A student record as the backend serializes it.
///
/// The id arrives under several spellings depending on which backend wrote
/// the row; all are accepted, and a row carrying none keeps an empty id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStudent {
    #[serde(default, alias = "Id", alias = "studentID")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Flattened student row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub grade: String,
    pub status: String,
}

impl From<ApiStudent> for Student {
    fn from(raw: ApiStudent) -> Self {
        Self {
            id: raw.id,
            full_name: names::join_name(&raw.first_name, &raw.last_name),
            email: raw.email,
            grade: raw.grade.unwrap_or_else(|| "N/A".to_owned()),
            status: raw.status.unwrap_or_else(|| "Active".to_owned()),
        }
    }
}

/// Body for `POST /Students`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade: String,
    pub status: String,
}

/// Body for `PUT /Students/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade: String,
    pub status: String,
}
