//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and the shared table/dialog surfaces
//! while reading shared state from Leptos context providers.

pub mod dialog;
pub mod entity_table;
pub mod layout;
pub mod navbar;
pub mod sidebar;
