//! Shell UI state shared between layout, sidebar, and navbar.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation shell.
///
/// On narrow viewports the sidebar slides over the content and a
/// translucent overlay closes it on click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
}
