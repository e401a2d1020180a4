//! # campusboard
//!
//! Leptos + WASM admin dashboard: authenticated user and student
//! management over an external REST API, inside a sidebar + navbar shell.
//!
//! This crate contains pages, components, application state, the HTTP API
//! layer, and browser utility helpers. There is no backend here: every
//! data operation is a thin wrapper over the `/api` REST surface, and the
//! session is a bearer token mirrored to localStorage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
