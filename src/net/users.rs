//! User resource calls: list, create, update, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each function makes one authenticated request and maps wire records
//! into the flat view model; callers own refetch-after-mutation
//! sequencing.

use crate::state::session::Session;

use super::api::ApiError;
use super::types::{CreateUserRequest, UpdateUserRequest, User};

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use super::types::ApiUser;

/// Fetch every user via `GET /Users`, flattened for table rendering.
///
/// # Errors
///
/// Fails with `ApiError` on transport errors, non-success statuses, or a
/// malformed success body.
pub async fn list_users(session: &Session) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::get(&api::users_endpoint()), session)
            .send()
            .await
            .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            return Err(api::fail_from_response(resp).await);
        }
        let raw = resp
            .json::<Vec<ApiUser>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(raw.into_iter().map(User::from).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(super::api::server_stub_error())
    }
}

/// Create a user via `POST /Users`.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the body text or a status default.
pub async fn create_user(session: &Session, request: &CreateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::post(&api::users_endpoint()), session)
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

/// Update a user via `PUT /Users/{id}`.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the body text or a status default.
pub async fn update_user(
    session: &Session,
    id: &str,
    request: &UpdateUserRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::put(&api::user_endpoint(id)), session)
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

/// Delete a user via `DELETE /Users/{id}`. No body is sent, so the request
/// carries no content-type header. Deleting an already-deleted id surfaces
/// the backend's failure; it never silently succeeds.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the body text or a status default.
pub async fn delete_user(session: &Session, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = api::attach_auth(gloo_net::http::Request::delete(&api::user_endpoint(id)), session)
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
