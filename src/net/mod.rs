//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds shared request plumbing and the error taxonomy, `types` the
//! wire schema and flattened view models, and the per-resource modules the
//! actual calls.

pub mod api;
pub mod auth;
pub mod students;
pub mod types;
pub mod users;
