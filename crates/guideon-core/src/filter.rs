// ── Filter predicates ──
//
// Pure set-membership predicates, one per store instance. Empty/unset
// dimensions match everything; set dimensions are AND-combined. Filter
// state is only mutated through the per-field update commands, and every
// update resets the page cursor (enforced by the owning store).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::{AuditKind, AuditLogEntry, DocumentEntry, DocumentStatus, Site};

// ── Sites ───────────────────────────────────────────────────────────

/// Activation dimension of the site filter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ActiveStatus {
    #[default]
    All,
    Active,
    Inactive,
}

/// Current constraints narrowing the site collection for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteFilter {
    /// Case-insensitive substring match against the site name.
    pub search_term: String,
    pub active_status: ActiveStatus,
}

impl SiteFilter {
    pub fn matches(&self, site: &Site) -> bool {
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            if !site.name.to_lowercase().contains(&term) {
                return false;
            }
        }
        match self.active_status {
            ActiveStatus::All => true,
            ActiveStatus::Active => site.is_active,
            ActiveStatus::Inactive => !site.is_active,
        }
    }
}

/// Single-field update command for [`SiteFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilterUpdate {
    SearchTerm(String),
    ActiveStatus(ActiveStatus),
}

impl SiteFilterUpdate {
    pub(crate) fn apply(self, filter: &mut SiteFilter) {
        match self {
            Self::SearchTerm(term) => filter.search_term = term,
            Self::ActiveStatus(status) => filter.active_status = status,
        }
    }
}

// ── Audit log ───────────────────────────────────────────────────────

/// Current constraints narrowing the audit trail for display.
///
/// The date range is inclusive on both ends and operates on
/// `occurred_at`, never on the display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub kind: Option<AuditKind>,
}

impl AuditFilter {
    pub fn matches(&self, entry: &AuditLogEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(from) = self.from {
            if entry.occurred_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.occurred_at > to {
                return false;
            }
        }
        true
    }
}

/// Single-field update command for [`AuditFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditFilterUpdate {
    From(Option<DateTime<Utc>>),
    To(Option<DateTime<Utc>>),
    Kind(Option<AuditKind>),
}

impl AuditFilterUpdate {
    pub(crate) fn apply(self, filter: &mut AuditFilter) {
        match self {
            Self::From(from) => filter.from = from,
            Self::To(to) => filter.to = to,
            Self::Kind(kind) => filter.kind = kind,
        }
    }
}

// ── Documents ───────────────────────────────────────────────────────

/// Current constraints narrowing the document ledger for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub status: Option<DocumentStatus>,
}

impl DocumentFilter {
    pub fn matches(&self, entry: &DocumentEntry) -> bool {
        self.status.is_none_or(|status| entry.status == status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::{AuditStatus, EntryId, SiteId};

    fn site(name: &str, is_active: bool) -> Site {
        let stamp = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
        Site {
            id: SiteId::new(1),
            name: name.into(),
            is_active,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn entry(kind: AuditKind, day: u32) -> AuditLogEntry {
        AuditLogEntry {
            id: EntryId::new(1),
            kind,
            site: None,
            action: "backup".into(),
            target: "DB_Daily".into(),
            status: AuditStatus::Success,
            message: "done".into(),
            occurred_at: Utc.with_ymd_and_hms(2026, 2, day, 12, 0, 0).unwrap(),
            time_label: "1 hour ago".into(),
        }
    }

    #[test]
    fn empty_site_filter_matches_everything() {
        let filter = SiteFilter::default();
        assert!(filter.matches(&site("Everland", true)));
        assert!(filter.matches(&site("Everland", false)));
    }

    #[test]
    fn search_term_is_case_insensitive_substring() {
        let mut filter = SiteFilter::default();
        SiteFilterUpdate::SearchTerm("EVER".into()).apply(&mut filter);
        assert!(filter.matches(&site("Everland", true)));
        assert!(!filter.matches(&site("Gyeongbokgung Palace", true)));
    }

    #[test]
    fn active_status_is_exact_match() {
        let mut filter = SiteFilter::default();
        SiteFilterUpdate::ActiveStatus(ActiveStatus::Inactive).apply(&mut filter);
        assert!(!filter.matches(&site("Everland", true)));
        assert!(filter.matches(&site("Everland", false)));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let filter = SiteFilter {
            search_term: "land".into(),
            active_status: ActiveStatus::Active,
        };
        assert!(filter.matches(&site("Everland", true)));
        assert!(!filter.matches(&site("Everland", false)));
        assert!(!filter.matches(&site("Namsan Tower", true)));
    }

    #[test]
    fn filtering_is_idempotent() {
        let filter = SiteFilter {
            search_term: "land".into(),
            active_status: ActiveStatus::All,
        };
        let sites = vec![site("Everland", true), site("Namsan Tower", true)];
        let once: Vec<_> = sites.iter().filter(|s| filter.matches(s)).collect();
        let twice: Vec<_> = once.iter().filter(|s| filter.matches(s)).collect();
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn audit_kind_filter_is_exact() {
        let filter = AuditFilter {
            kind: Some(AuditKind::System),
            ..AuditFilter::default()
        };
        assert!(filter.matches(&entry(AuditKind::System, 1)));
        assert!(!filter.matches(&entry(AuditKind::Device, 1)));
    }

    #[test]
    fn audit_date_range_is_inclusive() {
        let filter = AuditFilter {
            from: Some(Utc.with_ymd_and_hms(2026, 2, 2, 12, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2026, 2, 4, 12, 0, 0).unwrap()),
            kind: None,
        };
        assert!(!filter.matches(&entry(AuditKind::System, 1)));
        assert!(filter.matches(&entry(AuditKind::System, 2)));
        assert!(filter.matches(&entry(AuditKind::System, 4)));
        assert!(!filter.matches(&entry(AuditKind::System, 5)));
    }

    #[test]
    fn audit_range_composes_with_kind() {
        let filter = AuditFilter {
            from: Some(Utc.with_ymd_and_hms(2026, 2, 2, 0, 0, 0).unwrap()),
            to: None,
            kind: Some(AuditKind::User),
        };
        assert!(filter.matches(&entry(AuditKind::User, 3)));
        assert!(!filter.matches(&entry(AuditKind::System, 3)));
        assert!(!filter.matches(&entry(AuditKind::User, 1)));
    }
}
