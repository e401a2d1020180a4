use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    role: &'static str,
    status: &'static str,
}

fn rows() -> Vec<Row> {
    vec![
        Row { role: "Admin", status: "Active" },
        Row { role: "Editor", status: "Inactive" },
        Row { role: "User", status: "Active" },
        Row { role: "Admin", status: "Pending" },
    ]
}

fn role_of(row: &Row) -> &str {
    row.role
}

fn status_of(row: &Row) -> &str {
    row.status
}

fn role_filter(selected: &str) -> FieldFilter<Row> {
    FieldFilter {
        field: role_of,
        selected: selected.to_owned(),
    }
}

fn status_filter(selected: &str) -> FieldFilter<Row> {
    FieldFilter {
        field: status_of,
        selected: selected.to_owned(),
    }
}

// =============================================================
// Load phase transitions
// =============================================================

#[test]
fn entity_list_starts_idle_and_empty() {
    let list = EntityList::<Row>::default();
    assert_eq!(list.phase, LoadPhase::Idle);
    assert!(list.items.is_empty());
    assert!(!list.is_loading());
    assert_eq!(list.error(), None);
}

#[test]
fn begin_load_enters_loading() {
    let mut list = EntityList::<Row>::default();
    list.begin_load();
    assert!(list.is_loading());
}

#[test]
fn loaded_stores_items_and_clears_loading() {
    let mut list = EntityList::default();
    list.begin_load();
    list.loaded(rows());
    assert_eq!(list.phase, LoadPhase::Loaded);
    assert_eq!(list.items.len(), 4);
}

#[test]
fn load_failed_keeps_previous_items() {
    let mut list = EntityList::default();
    list.loaded(rows());
    list.begin_load();
    list.load_failed("Failed to load users. Please try again later.");
    assert_eq!(list.error(), Some("Failed to load users. Please try again later."));
    assert_eq!(list.items.len(), 4);
}

#[test]
fn refetch_after_mutation_reenters_loading() {
    let mut list = EntityList::default();
    list.loaded(rows());
    list.begin_load();
    assert!(list.is_loading());
    list.loaded(vec![Row { role: "User", status: "Active" }]);
    assert_eq!(list.items.len(), 1);
}

// =============================================================
// Categorical filters
// =============================================================

#[test]
fn empty_filters_impose_no_constraint() {
    let filtered = apply_filters(&rows(), &[role_filter(""), status_filter("")]);
    assert_eq!(filtered, rows());
}

#[test]
fn single_filter_matches_on_equality() {
    let filtered = apply_filters(&rows(), &[role_filter("Admin"), status_filter("")]);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.role == "Admin"));
}

#[test]
fn both_filters_must_match() {
    let filtered = apply_filters(&rows(), &[role_filter("Admin"), status_filter("Active")]);
    assert_eq!(
        filtered,
        vec![Row { role: "Admin", status: "Active" }]
    );
}

#[test]
fn filters_preserve_input_order() {
    let filtered = apply_filters(&rows(), &[role_filter(""), status_filter("Active")]);
    assert_eq!(
        filtered,
        vec![
            Row { role: "Admin", status: "Active" },
            Row { role: "User", status: "Active" },
        ]
    );
}

#[test]
fn no_match_yields_empty() {
    let filtered = apply_filters(&rows(), &[role_filter("Editor"), status_filter("Pending")]);
    assert!(filtered.is_empty());
}
