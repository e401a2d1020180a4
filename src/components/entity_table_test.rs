use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: &'static str,
    name: &'static str,
    status: &'static str,
}

impl Record for Row {
    fn id(&self) -> &str {
        self.id
    }
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column { header: "Name", value: |r: &Row| r.name.to_owned(), badge: None },
        Column { header: "Status", value: |r: &Row| r.status.to_owned(), badge: None },
    ]
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: "1", name: "Charlie", status: "Active" },
        Row { id: "2", name: "alice", status: "Pending" },
        Row { id: "3", name: "Bob", status: "Active" },
    ]
}

// =============================================================
// cycle_sort
// =============================================================

#[test]
fn cycle_sort_starts_ascending() {
    assert_eq!(cycle_sort(None, 0), Some((0, SortDir::Asc)));
}

#[test]
fn cycle_sort_ascending_becomes_descending() {
    assert_eq!(cycle_sort(Some((0, SortDir::Asc)), 0), Some((0, SortDir::Desc)));
}

#[test]
fn cycle_sort_descending_clears() {
    assert_eq!(cycle_sort(Some((0, SortDir::Desc)), 0), None);
}

#[test]
fn cycle_sort_other_column_restarts_ascending() {
    assert_eq!(cycle_sort(Some((0, SortDir::Desc)), 1), Some((1, SortDir::Asc)));
}

// =============================================================
// quick_filter
// =============================================================

#[test]
fn quick_filter_empty_term_keeps_everything() {
    assert_eq!(quick_filter(&rows(), &columns(), ""), rows());
    assert_eq!(quick_filter(&rows(), &columns(), "   "), rows());
}

#[test]
fn quick_filter_matches_case_insensitively() {
    let hits = quick_filter(&rows(), &columns(), "ALICE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn quick_filter_matches_any_column() {
    let hits = quick_filter(&rows(), &columns(), "pending");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn quick_filter_substring_match() {
    let hits = quick_filter(&rows(), &columns(), "li");
    // "Charlie" and "alice" both contain "li".
    assert_eq!(hits.len(), 2);
}

// =============================================================
// sort_rows
// =============================================================

#[test]
fn sort_rows_ascending_ignores_case() {
    let mut data = rows();
    sort_rows(&mut data, &columns(), 0, SortDir::Asc);
    let names: Vec<_> = data.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["alice", "Bob", "Charlie"]);
}

#[test]
fn sort_rows_descending_reverses() {
    let mut data = rows();
    sort_rows(&mut data, &columns(), 0, SortDir::Desc);
    let names: Vec<_> = data.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Charlie", "Bob", "alice"]);
}

#[test]
fn sort_rows_out_of_range_column_is_a_no_op() {
    let mut data = rows();
    sort_rows(&mut data, &columns(), 9, SortDir::Asc);
    assert_eq!(data, rows());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(100, 50), 2);
}

#[test]
fn page_window_returns_requested_slice() {
    assert_eq!(page_window(25, 0, 10), 0..10);
    assert_eq!(page_window(25, 1, 10), 10..20);
    assert_eq!(page_window(25, 2, 10), 20..25);
}

#[test]
fn page_window_clamps_past_the_end() {
    // A stale page index (rows shrank after a filter change) clamps to the
    // last page instead of slicing out of bounds.
    assert_eq!(page_window(25, 9, 10), 20..25);
    assert_eq!(page_window(0, 3, 10), 0..0);
}

#[test]
fn page_size_choices_match_the_widget() {
    assert_eq!(PAGE_SIZES, [10, 20, 50]);
}
