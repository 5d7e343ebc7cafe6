// ── Document ledger store ──
//
// Read-only list of knowledge-base uploads. Document ids are opaque
// strings assigned by the upload pipeline, so this store keeps a plain
// ordered list rather than an id-keyed collection.

use crate::filter::DocumentFilter;
use crate::model::{DocumentEntry, DocumentStatus};
use crate::page::{PageView, Pager};

/// In-memory view over uploaded documents.
pub struct DocumentLedger {
    entries: Vec<DocumentEntry>,
    filter: DocumentFilter,
    pager: Pager,
}

impl DocumentLedger {
    /// Build a ledger over an existing dataset, newest-first.
    pub fn with_entries(entries: Vec<DocumentEntry>) -> Self {
        Self {
            entries,
            filter: DocumentFilter::default(),
            pager: Pager::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager = Pager::new(page_size);
        self
    }

    pub fn page(&self) -> PageView<DocumentEntry> {
        let filtered: Vec<&DocumentEntry> = self
            .entries
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect();
        let total_count = filtered.len();
        let total_pages = self.pager.total_pages(total_count);
        let rows = self.pager.slice(&filtered).iter().map(|e| (*e).clone()).collect();

        PageView {
            rows,
            page: self.pager.page(),
            total_pages,
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narrow to one ingestion state (`None` clears the dimension).
    /// Always resets the cursor to page 0.
    pub fn set_status_filter(&mut self, status: Option<DocumentStatus>) {
        self.filter.status = status;
        self.pager.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }
}
