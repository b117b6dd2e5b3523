//! Table engine: filter → sort → paginate over an owned row set.
//!
//! The view is recomputed from scratch on every call to [`TableEngine::view`];
//! tables hold a few dozen rows, so there is no memoisation. Row replacement
//! (a refresh tick) swaps only the rows and leaves query, facet, sort, page
//! and selection untouched.

use crate::filter::{filter_rows, Facet};
use crate::record::{Column, Record};
use crate::selection::Selection;
use crate::sort::{sort_rows, SortDirection, SortState};

pub use crate::filter::matches_query;

/// Per-table constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec<F> {
    /// Rows per page; `None` shows every row on one page.
    pub page_size: Option<usize>,
    /// Sort applied before the user picks a column; `None` is insertion order.
    pub default_sort: Option<SortState<F>>,
    /// Direction used when a column is selected for the first time.
    pub new_field_direction: SortDirection,
}

impl<F> TableSpec<F> {
    pub fn paged(page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            default_sort: None,
            new_field_direction: SortDirection::Descending,
        }
    }

    pub fn unpaged() -> Self {
        Self {
            page_size: None,
            default_sort: None,
            new_field_direction: SortDirection::Descending,
        }
    }

    pub fn with_default_sort(mut self, sort: SortState<F>) -> Self {
        self.default_sort = Some(sort);
        self
    }

    pub fn with_new_field_direction(mut self, direction: SortDirection) -> Self {
        self.new_field_direction = direction;
        self
    }
}

/// Number of pages needed for `count` rows. Zero rows need zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return if count == 0 { 0 } else { 1 };
    }
    count.div_ceil(page_size)
}

/// The `[(page-1)*size, page*size)` slice of `items`, empty past the end.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One computed page of a table.
#[derive(Debug, Clone)]
pub struct TableView<'a, R> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a R>,
    /// Filtered row count (not the unfiltered total).
    pub total: usize,
    /// Page actually shown, clamped to `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    /// Zero-based index of `rows[0]` within the filtered, sorted set.
    pub offset: usize,
}

impl<R> TableView<'_, R> {
    /// One-based inclusive range of rows shown; `(0, 0)` when empty.
    pub fn range(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            (0, 0)
        } else {
            (self.offset + 1, self.offset + self.rows.len())
        }
    }

    /// `Showing 21 to 25 of 25`.
    pub fn summary(&self) -> String {
        let (from, to) = self.range();
        format!("Showing {from} to {to} of {}", self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Owned rows plus the user's view state for one table instance.
#[derive(Debug, Clone)]
pub struct TableEngine<R: Record> {
    rows: Vec<R>,
    spec: TableSpec<R::Field>,
    query: String,
    facet: R::Facet,
    sort: Option<SortState<R::Field>>,
    page: usize,
    pub selection: Selection,
}

impl<R: Record> TableEngine<R> {
    pub fn new(rows: Vec<R>, spec: TableSpec<R::Field>) -> Self {
        Self {
            rows,
            sort: spec.default_sort,
            spec,
            query: String::new(),
            facet: R::Facet::default(),
            page: 1,
            selection: Selection::new(),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn spec(&self) -> &TableSpec<R::Field> {
        &self.spec
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn facet(&self) -> &R::Facet {
        &self.facet
    }

    pub fn sort(&self) -> Option<SortState<R::Field>> {
        self.sort
    }

    /// The requested page; see [`TableView::page`] for the page actually shown.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Swap in a fresh row set. View state is preserved.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Replace the search query and return to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.page = 1;
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.page = 1;
    }

    pub fn set_facet(&mut self, facet: R::Facet) {
        self.facet = facet;
        self.page = 1;
    }

    pub fn cycle_facet(&mut self) {
        let next = self.facet.next();
        self.set_facet(next);
    }

    /// Header click on `field`. Returns false for non-sortable columns.
    pub fn sort_by(&mut self, field: R::Field) -> bool {
        if !field.sortable() {
            return false;
        }
        self.sort = Some(SortState::toggle(self.sort, field, self.spec.new_field_direction));
        true
    }

    pub fn set_sort(&mut self, sort: Option<SortState<R::Field>>) {
        self.sort = sort;
    }

    /// Flip the active direction; no-op when unsorted.
    pub fn reverse_sort(&mut self) {
        if let Some(s) = self.sort.as_mut() {
            s.direction = s.direction.flip();
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Move the active sort to the next (or previous) sortable column.
    pub fn cycle_sort_field(&mut self, forward: bool) {
        self.cycle_sort_field_in(R::columns(), forward);
    }

    /// Like [`cycle_sort_field`](Self::cycle_sort_field), restricted to the
    /// sortable columns in `columns`. Each step is a header click on the
    /// column it lands on.
    pub fn cycle_sort_field_in(&mut self, columns: &[R::Field], forward: bool) {
        let sortable: Vec<R::Field> = columns.iter().copied().filter(|f| f.sortable()).collect();
        if sortable.is_empty() {
            return;
        }
        let current = self
            .sort
            .and_then(|s| sortable.iter().position(|f| *f == s.field));
        let len = sortable.len();
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.sort_by(sortable[next]);
    }

    fn filtered_sorted(&self) -> Vec<&R> {
        let mut rows = filter_rows(&self.rows, &self.query, &self.facet);
        sort_rows(&mut rows, self.sort.as_ref());
        rows
    }

    pub fn filtered_len(&self) -> usize {
        filter_rows(&self.rows, &self.query, &self.facet).len()
    }

    pub fn total_pages(&self) -> usize {
        match self.spec.page_size {
            Some(size) => total_pages(self.filtered_len(), size),
            None => 1,
        }
    }

    /// Jump to `page`, clamped to `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Run the full pipeline and return the current page.
    pub fn view(&self) -> TableView<'_, R> {
        let all = self.filtered_sorted();
        let total = all.len();
        match self.spec.page_size {
            Some(size) if size > 0 => {
                let pages = total_pages(total, size);
                let page = self.page.clamp(1, pages.max(1));
                let rows = paginate(&all, page, size).to_vec();
                TableView {
                    rows,
                    total,
                    page,
                    total_pages: pages,
                    offset: (page - 1) * size,
                }
            }
            _ => TableView {
                rows: all,
                total,
                page: 1,
                total_pages: 1,
                offset: 0,
            },
        }
    }

    pub fn toggle_selected(&mut self, key: &str) -> bool {
        self.selection.toggle(key)
    }

    /// Select every filtered row, or clear when they are all selected already.
    pub fn toggle_select_all(&mut self) {
        let keys: Vec<String> = self.filtered_sorted().iter().map(|r| r.key().to_string()).collect();
        self.selection.toggle_all(keys.iter().map(String::as_str));
    }

    /// Selected rows in source order, including rows hidden by the filter.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.rows
            .iter()
            .filter(|r| self.selection.contains(r.key()))
            .collect()
    }
}
