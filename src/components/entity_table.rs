//! Generic searchable, sortable, paginated table for entity list pages.
//!
//! DESIGN
//! ======
//! The users and students pages render identical chrome: a quick filter
//! applied over the already-filtered rows, per-column sort, client-side
//! pagination with fixed page-size choices, and row edit/delete actions.
//! One generic component keeps that state machine in a single place;
//! pages supply column definitions and callbacks.

#[cfg(test)]
#[path = "entity_table_test.rs"]
mod entity_table_test;

use leptos::prelude::*;

/// Rows the table can render: cloneable records with a stable id.
pub trait Record: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// One rendered column: header label, value accessor, and an optional
/// badge class derived from the value.
pub struct Column<E> {
    pub header: &'static str,
    pub value: fn(&E) -> String,
    pub badge: Option<fn(&str) -> &'static str>,
}

// Derives would demand `E: Clone`; the fields are plain pointers.
impl<E> Clone for Column<E> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            value: self.value,
            badge: self.badge,
        }
    }
}

/// Column sort direction; header clicks cycle asc → desc → unsorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Page-size choices offered by the footer selector.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Next sort state after clicking the header of column `col`.
fn cycle_sort(current: Option<(usize, SortDir)>, col: usize) -> Option<(usize, SortDir)> {
    match current {
        Some((c, SortDir::Asc)) if c == col => Some((col, SortDir::Desc)),
        Some((c, SortDir::Desc)) if c == col => None,
        _ => Some((col, SortDir::Asc)),
    }
}

fn sort_indicator(current: Option<(usize, SortDir)>, col: usize) -> &'static str {
    match current {
        Some((c, SortDir::Asc)) if c == col => " ▲",
        Some((c, SortDir::Desc)) if c == col => " ▼",
        _ => "",
    }
}

/// Case-insensitive substring quick filter across every rendered column.
fn quick_filter<E: Clone>(rows: &[E], columns: &[Column<E>], term: &str) -> Vec<E> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .any(|col| (col.value)(row).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort of `rows` by the rendered value of column `col`.
fn sort_rows<E>(rows: &mut [E], columns: &[Column<E>], col: usize, dir: SortDir) {
    let Some(column) = columns.get(col) else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = (column.value)(a)
            .to_lowercase()
            .cmp(&(column.value)(b).to_lowercase());
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// Total page count for `len` rows; never zero so "Page 1 of 1" renders
/// even for an empty table.
fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Clamp `page` into range and return the row index window it shows.
fn page_window(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let page = page.min(page_count(len, page_size) - 1);
    let start = page * page_size;
    start..start.saturating_add(page_size).min(len)
}

/// Paginated, sortable table over `rows` with per-row edit/delete actions.
///
/// `rows` is expected to be pre-filtered by the page's categorical
/// filters; `search` applies the widget's own quick filter on top.
#[component]
pub fn EntityTable<E: Record>(
    #[prop(into)] rows: Signal<Vec<E>>,
    columns: Vec<Column<E>>,
    #[prop(into)] search: Signal<String>,
    on_edit: Callback<E>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let col_span = columns.len() + 1;
    let columns = StoredValue::new(columns);
    let sort = RwSignal::new(None::<(usize, SortDir)>);
    let page = RwSignal::new(0_usize);
    let page_size = RwSignal::new(PAGE_SIZES[0]);

    let visible = Memo::new(move |_| {
        let mut out = columns.with_value(|cols| quick_filter(&rows.get(), cols, &search.get()));
        if let Some((col, dir)) = sort.get() {
            columns.with_value(|cols| sort_rows(&mut out, cols, col, dir));
        }
        out
    });

    let paged = move || {
        let all = visible.get();
        let window = page_window(all.len(), page.get(), page_size.get());
        all[window].to_vec()
    };

    let pages = move || page_count(visible.with(Vec::len), page_size.get());

    view! {
        <div class="entity-table">
            <table class="entity-table__grid">
                <thead>
                    <tr>
                        {columns
                            .with_value(|cols| {
                                cols.iter()
                                    .enumerate()
                                    .map(|(idx, col)| {
                                        let header = col.header;
                                        view! {
                                            <th
                                                class="entity-table__header"
                                                on:click=move |_| {
                                                    sort.update(|s| *s = cycle_sort(*s, idx));
                                                    page.set(0);
                                                }
                                            >
                                                {header}
                                                {move || sort_indicator(sort.get(), idx)}
                                            </th>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })}
                        <th class="entity-table__header entity-table__header--actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let current = paged();
                        if current.is_empty() {
                            return view! {
                                <tr>
                                    <td class="entity-table__empty" colspan=col_span.to_string()>"No records"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        current
                            .into_iter()
                            .map(|row| {
                                let row_id = row.id().to_owned();
                                let cells = columns
                                    .with_value(|cols| {
                                        cols.iter()
                                            .map(|col| {
                                                let value = (col.value)(&row);
                                                match col.badge {
                                                    Some(badge) => {
                                                        let class = format!("badge {}", badge(&value));
                                                        view! {
                                                            <td class="entity-table__cell">
                                                                <span class=class>{value}</span>
                                                            </td>
                                                        }
                                                            .into_any()
                                                    }
                                                    None => {
                                                        view! {
                                                            <td class="entity-table__cell">{value}</td>
                                                        }
                                                            .into_any()
                                                    }
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    });
                                view! {
                                    <tr class="entity-table__row">
                                        {cells}
                                        <td class="entity-table__cell entity-table__cell--actions">
                                            <button
                                                class="btn btn--icon"
                                                title="Edit"
                                                on:click=move |_| on_edit.run(row.clone())
                                            >
                                                "✎"
                                            </button>
                                            <button
                                                class="btn btn--icon btn--icon-danger"
                                                title="Delete"
                                                on:click=move |_| on_delete.run(row_id.clone())
                                            >
                                                "✕"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <div class="entity-table__footer">
                <label class="entity-table__page-size">
                    "Rows per page"
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            page_size.set(size);
                            page.set(0);
                        }
                    }>
                        {PAGE_SIZES
                            .iter()
                            .map(|&size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || page_size.get() == size
                                    >
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <span class="entity-table__spacer"></span>
                <span class="entity-table__page-info">
                    {move || {
                        let total = pages();
                        let current = page.get().min(total - 1) + 1;
                        format!("Page {current} of {total}")
                    }}
                </span>
                <button
                    class="btn"
                    disabled=move || page.get() == 0
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                >
                    "Prev"
                </button>
                <button
                    class="btn"
                    disabled=move || page.get() + 1 >= pages()
                    on:click=move |_| {
                        let total = pages();
                        page.update(|p| *p = (*p + 1).min(total - 1));
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
