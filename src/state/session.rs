//! Explicit session context: bearer-token handling for guard and requests.
//!
//! DESIGN
//! ======
//! The token lives in a reactive signal mirrored to a single localStorage
//! slot, so the route guard re-evaluates on login/logout while the API
//! layer reads the current value without subscribing. There is no expiry
//! check and no multi-tab synchronization.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;

/// localStorage key holding the bearer token between visits.
pub const TOKEN_STORAGE_KEY: &str = "campusboard_token";

/// Session context handed to the route guard and the API layer.
///
/// Provided once at the app root; cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Create a session seeded from persistent storage.
    pub fn load() -> Self {
        Self {
            token: RwSignal::new(storage::load_string(TOKEN_STORAGE_KEY)),
        }
    }

    /// Store a freshly issued token and persist it.
    pub fn set_token(&self, value: &str) {
        storage::save_string(TOKEN_STORAGE_KEY, value);
        self.token.set(Some(value.to_owned()));
    }

    /// Drop the token, ending the session.
    pub fn clear_token(&self) {
        storage::remove(TOKEN_STORAGE_KEY);
        self.token.set(None);
    }

    /// Whether a token is present. Reactive when read inside an effect.
    pub fn has_token(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// `Authorization` header for authenticated requests, if logged in.
    /// Reads the token without subscribing.
    pub fn authorization_header(&self) -> Option<(&'static str, String)> {
        self.token
            .with_untracked(|token| token.as_deref().map(|t| ("Authorization", bearer(t))))
    }
}

/// Format a token as a bearer credential.
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
