// ── Pagination ──
//
// Derives the visible window of a filtered, ordered sequence and keeps
// the page cursor consistent with collection size changes. The cursor is
// only re-clamped on the enumerated trigger events (a mutation that can
// shrink the filtered set, or a filter change) -- `set_page` stores the
// caller's value unchecked, since the caller only offers valid pages.

use serde::Serialize;

/// Rows per page for every admin list view.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Mutable page cursor plus the fixed page size of one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move the cursor. Not validated against the current page count.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Reset the cursor to the first page (every filter change does this).
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// `ceil(filtered_count / page_size)`; an empty set has zero pages,
    /// not one empty page.
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size)
    }

    /// Re-establish the cursor invariant after the filtered set shrank:
    /// clamp to the last page, or to 0 when no pages remain.
    pub fn clamp(&mut self, filtered_count: usize) {
        let total = self.total_pages(filtered_count);
        if total == 0 {
            self.page = 0;
        } else if self.page >= total {
            self.page = total - 1;
        }
    }

    /// The visible slice `[page*size, page*size + size)` of the filtered
    /// sequence, truncated at the end.
    pub fn slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.page_size).min(filtered.len());
        let end = start.saturating_add(self.page_size).min(filtered.len());
        filtered.get(start..end).unwrap_or_default()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page of display-ready rows plus the pagination facts the UI needs
/// to render the pager controls.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    /// Size of the filtered set (not of the whole collection).
    pub total_count: usize,
}
