//! Full-name splitting and joining for the flattened view models.
//!
//! The backend stores first and last names separately; the UI edits a
//! single full-name field. Splitting is lossy for multi-word last names:
//! everything after the first space becomes the last name.

#[cfg(test)]
#[path = "names_test.rs"]
mod names_test;

/// Split a full name into `(first_name, last_name)` for outgoing requests.
///
/// The remainder after the first space becomes the last name; when there is
/// no remainder, `"."` stands in so the backend's required field is never
/// empty.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split(' ');
    let first = parts.next().unwrap_or_default().to_owned();
    let rest = parts.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        (first, ".".to_owned())
    } else {
        (first, rest)
    }
}

/// Join backend name fields into the display name the tables render.
pub fn join_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
