//! Shared request plumbing for the admin REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call makes exactly one attempt and surfaces failures as
//! `ApiError`; callers decide whether to show the detail or a static
//! message. No retry, no timeout, no backoff.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::state::session::Session;

/// Base path of the backend API.
pub const API_BASE_URL: &str = "/api";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status. `message` is the response body text when
    /// the server sent one, otherwise a default naming the status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Transport-level failure before any status was received.
    #[error("{0}")]
    Network(String),
    /// 2xx response whose body did not parse as the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn users_endpoint() -> String {
    format!("{API_BASE_URL}/Users")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn user_endpoint(id: &str) -> String {
    format!("{API_BASE_URL}/Users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn students_endpoint() -> String {
    format!("{API_BASE_URL}/Students")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn student_endpoint(id: &str) -> String {
    format!("{API_BASE_URL}/Students/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_endpoint() -> String {
    format!("{API_BASE_URL}/Auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn register_endpoint() -> String {
    format!("{API_BASE_URL}/Auth/register")
}

/// Failure message for a non-success status.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP error! status: {status}")
    } else {
        body.to_owned()
    }
}

/// Drain a failed response into an `ApiError::Http`.
#[cfg(feature = "hydrate")]
pub(crate) async fn fail_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        message: status_error_message(status, &body),
    }
}

/// Attach the session's bearer header, when logged in.
#[cfg(feature = "hydrate")]
pub(crate) fn attach_auth(
    builder: gloo_net::http::RequestBuilder,
    session: &Session,
) -> gloo_net::http::RequestBuilder {
    match session.authorization_header() {
        Some((name, value)) => builder.header(name, &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn network_error(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
pub(crate) fn server_stub_error() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
