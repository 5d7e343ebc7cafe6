// ── Audit trail store ──
//
// Read-only instance of the list-view shape: the entries are an
// append-only record produced elsewhere; this store only filters and
// paginates them for display.

use crate::filter::{AuditFilter, AuditFilterUpdate};
use crate::model::{AuditLogEntry, EntryId};
use crate::page::{PageView, Pager};
use crate::store::collection::{Entity, EntityCollection};

impl Entity for AuditLogEntry {
    type Id = EntryId;

    fn id(&self) -> EntryId {
        self.id
    }
}

/// In-memory view over the platform audit log.
pub struct AuditTrail {
    entries: EntityCollection<AuditLogEntry>,
    filter: AuditFilter,
    pager: Pager,
}

impl AuditTrail {
    /// Build a trail over an existing dataset, newest-first.
    pub fn with_entries(entries: Vec<AuditLogEntry>) -> Self {
        Self {
            entries: EntityCollection::with_items(entries),
            filter: AuditFilter::default(),
            pager: Pager::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager = Pager::new(page_size);
        self
    }

    /// The current page of the filtered trail.
    pub fn page(&self) -> PageView<AuditLogEntry> {
        let filtered: Vec<&AuditLogEntry> = self
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

    pub fn get(&self, id: EntryId) -> Option<&AuditLogEntry> {
        self.entries.get(id)
    }

    pub fn filter(&self) -> &AuditFilter {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one filter-field update. Always resets the cursor to page 0.
    pub fn update_filter(&mut self, update: AuditFilterUpdate) {
        update.apply(&mut self.filter);
        self.pager.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AuditKind, AuditStatus};

    fn entries(count: u64) -> Vec<AuditLogEntry> {
        (1..=count)
            .rev()
            .map(|n| AuditLogEntry {
                id: EntryId::new(n),
                kind: if n % 2 == 0 { AuditKind::System } else { AuditKind::User },
                site: (n % 3 != 0).then(|| "Everland".to_owned()),
                action: "site created".into(),
                target: format!("SITE-{n:03}"),
                status: AuditStatus::Success,
                message: "ok".into(),
                occurred_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::hours(i64::try_from(n).unwrap()),
                time_label: format!("{n} hours ago"),
            })
            .collect()
    }

    #[test]
    fn pages_the_filtered_trail() {
        let trail = AuditTrail::with_entries(entries(10));
        let view = trail.page();
        assert_eq!(view.total_count, 10);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, EntryId::new(10));
    }

    #[test]
    fn kind_filter_narrows_and_resets_cursor() {
        let mut trail = AuditTrail::with_entries(entries(10));
        trail.set_page(1);

        trail.update_filter(AuditFilterUpdate::Kind(Some(AuditKind::System)));

        let view = trail.page();
        assert_eq!(view.page, 0);
        assert_eq!(view.total_count, 5);
        assert!(view.rows.iter().all(|e| e.kind == AuditKind::System));
    }

    #[test]
    fn date_range_operates_on_occurred_at() {
        let mut trail = AuditTrail::with_entries(entries(10));
        let base = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

        trail.update_filter(AuditFilterUpdate::From(Some(base + chrono::Duration::hours(4))));
        trail.update_filter(AuditFilterUpdate::To(Some(base + chrono::Duration::hours(7))));

        let view = trail.page();
        // Entries 4..=7, inclusive on both ends.
        assert_eq!(view.total_count, 4);
    }

    #[test]
    fn empty_filtered_set_has_zero_pages() {
        let mut trail = AuditTrail::with_entries(Vec::new());
        assert!(trail.is_empty());
        let view = trail.page();
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 0);

        trail.update_filter(AuditFilterUpdate::Kind(Some(AuditKind::Device)));
        assert_eq!(trail.page().total_pages, 0);
    }

    #[test]
    fn get_by_id_serves_the_detail_view() {
        let trail = AuditTrail::with_entries(entries(3));
        assert_eq!(trail.get(EntryId::new(2)).unwrap().target, "SITE-002");
        assert!(trail.get(EntryId::new(9)).is_none());
    }
}
