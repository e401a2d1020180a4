//! Student resource calls: list, create, update, delete.
//!
//! Mirrors the user resource with a grade field instead of role/password,
//! plus the id-spelling tolerance on list responses.

use crate::state::session::Session;

use super::api::ApiError;
use super::types::{CreateStudentRequest, Student, UpdateStudentRequest};

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use super::types::ApiStudent;

/// Fetch every student via `GET /Students`, flattened for table rendering.
///
/// # Errors
///
/// Fails with `ApiError` on transport errors, non-success statuses, or a
/// malformed success body.
pub async fn list_students(session: &Session) -> Result<Vec<Student>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::get(&api::students_endpoint()), session)
            .send()
            .await
            .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            return Err(api::fail_from_response(resp).await);
        }
        let raw = resp
            .json::<Vec<ApiStudent>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(raw.into_iter().map(Student::from).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(super::api::server_stub_error())
    }
}

/// Create a student via `POST /Students`.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the body text or a status default.
pub async fn create_student(
    session: &Session,
    request: &CreateStudentRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::post(&api::students_endpoint()), session)
            .json(request)
            .map_err(|e| api::network_error(&e))?
            .send()
            .await
            .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            return Err(api::fail_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, request);
        Err(super::api::server_stub_error())
    }
}

/// Update a student via `PUT /Students/{id}`.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the body text or a status default.
pub async fn update_student(
    session: &Session,
    id: &str,
    request: &UpdateStudentRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::put(&api::student_endpoint(id)), session)
            .json(request)
            .map_err(|e| api::network_error(&e))?
            .send()
            .await
            .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            return Err(api::fail_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, request);
        Err(super::api::server_stub_error())
    }
}

/// Delete a student via `DELETE /Students/{id}`. No body, no content-type.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the body text or a status default.
pub async fn delete_student(session: &Session, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(
            gloo_net::http::Request::delete(&api::student_endpoint(id)),
            session,
        )
        .send()
        .await
        .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            return Err(api::fail_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(super::api::server_stub_error())
    }
}
