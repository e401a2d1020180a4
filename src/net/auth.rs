//! Login and registration calls. Neither carries the bearer header; both
//! run before a session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiError;
use super::types::{CreateUserRequest, LoginRequest, LoginResponse};

#[cfg(feature = "hydrate")]
use super::api;

/// Registration failure message: the response body text when the server
/// sent one, otherwise a generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn register_error_message(body: &str) -> String {
    if body.trim().is_empty() {
        "Registration failed".to_owned()
    } else {
        body.to_owned()
    }
}

/// Exchange credentials for a token via `POST /Auth/login`.
///
/// # Errors
///
/// Fails with `ApiError` on transport errors, non-success statuses, or a
/// malformed success body.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api::login_endpoint())
            .json(request)
            .map_err(|e| api::network_error(&e))?
            .send()
            .await
            .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            return Err(api::fail_from_response(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(super::api::server_stub_error())
    }
}

/// Create an account via `POST /Auth/register`. The backend returns an
/// empty body on success.
///
/// # Errors
///
/// Fails with `ApiError::Http` carrying the response body text (or a
/// generic fallback) on non-success statuses.
pub async fn register(request: &CreateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api::register_endpoint())
            .json(request)
            .map_err(|e| api::network_error(&e))?
            .send()
            .await
            .map_err(|e| api::network_error(&e))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: register_error_message(&body),
            });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(super::api::server_stub_error())
    }
}
