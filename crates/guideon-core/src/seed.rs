// ── Session seed data ──
//
// The dataset the admin console ships client-side while the platform
// backend is unwired. Swapping these for API calls is the planned
// replacement path; nothing else in the crate knows the data is mock.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::{
    AuditKind, AuditLogEntry, AuditStatus, DocumentEntry, DocumentStatus, EntryId, InviteId,
    InviteStatus, Site, SiteId, SiteInvite,
};
use crate::scope::{AdminRole, Operator};

fn stamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("seed timestamps are valid")
}

/// The eight registered tourism sites, newest-first.
pub fn sites() -> Vec<Site> {
    let rows: [(u64, &str, bool, DateTime<Utc>, DateTime<Utc>); 8] = [
        (1, "Everland", true, stamp(2026, 1, 15, 9, 0), stamp(2026, 1, 15, 9, 0)),
        (2, "Gyeongbokgung Palace", true, stamp(2026, 1, 18, 10, 30), stamp(2026, 2, 1, 14, 0)),
        (3, "Seoul Land", false, stamp(2026, 1, 20, 11, 0), stamp(2026, 1, 25, 16, 0)),
        (4, "Jeju Folk Village", true, stamp(2026, 1, 22, 8, 0), stamp(2026, 1, 22, 8, 0)),
        (5, "Lotte World", true, stamp(2026, 1, 25, 13, 0), stamp(2026, 2, 10, 9, 30)),
        (6, "Korean Folk Village", false, stamp(2026, 1, 28, 10, 0), stamp(2026, 2, 5, 11, 0)),
        (7, "Busan Haeundae Tourist Zone", true, stamp(2026, 2, 1, 9, 0), stamp(2026, 2, 1, 9, 0)),
        (8, "Namsan Tower", true, stamp(2026, 2, 3, 14, 0), stamp(2026, 2, 3, 14, 0)),
    ];

    rows.into_iter()
        .rev()
        .map(|(id, name, is_active, created_at, updated_at)| Site {
            id: SiteId::new(id),
            name: name.to_owned(),
            is_active,
            created_at,
            updated_at,
        })
        .collect()
}

/// Invites already sent before this session started.
pub fn invites() -> Vec<SiteInvite> {
    vec![SiteInvite {
        id: InviteId::new(1),
        site_id: SiteId::new(1),
        email: "operator@example.com".into(),
        status: InviteStatus::Pending,
        created_at: stamp(2026, 2, 3, 11, 0),
    }]
}

/// Recent platform audit entries, newest-first. `now` anchors the
/// relative ages so the trail always reads as current.
pub fn audit_entries(now: DateTime<Utc>) -> Vec<AuditLogEntry> {
    struct Row {
        kind: AuditKind,
        site: Option<&'static str>,
        action: &'static str,
        target: &'static str,
        age_minutes: i64,
        label: &'static str,
        status: AuditStatus,
        message: &'static str,
    }

    let rows = [
        Row {
            kind: AuditKind::User,
            site: Some("Gyeongbokgung Palace"),
            action: "site created",
            target: "SITE-003",
            age_minutes: 0,
            label: "just now",
            status: AuditStatus::Success,
            message: "New site \"Gyeongbokgung Palace\" was created.",
        },
        Row {
            kind: AuditKind::Device,
            site: Some("Everland"),
            action: "fault detected",
            target: "KIOSK-006",
            age_minutes: 10,
            label: "10 minutes ago",
            status: AuditStatus::Warning,
            message: "Network connectivity is degraded.",
        },
        Row {
            kind: AuditKind::System,
            site: None,
            action: "system backup",
            target: "DB_Daily",
            age_minutes: 60,
            label: "1 hour ago",
            status: AuditStatus::Success,
            message: "Daily data backup completed.",
        },
        Row {
            kind: AuditKind::System,
            site: Some("Lotte World"),
            action: "API error",
            target: "Zone_API",
            age_minutes: 120,
            label: "2 hours ago",
            status: AuditStatus::Error,
            message: "Zone information sync failed.",
        },
        Row {
            kind: AuditKind::User,
            site: Some("Everland"),
            action: "operator invited",
            target: "operator@example.com",
            age_minutes: 180,
            label: "3 hours ago",
            status: AuditStatus::Success,
            message: "Site operator invite was sent.",
        },
        Row {
            kind: AuditKind::User,
            site: Some("Namsan Tower"),
            action: "site renamed",
            target: "SITE-008",
            age_minutes: 300,
            label: "5 hours ago",
            status: AuditStatus::Success,
            message: "Site name was updated.",
        },
        Row {
            kind: AuditKind::Device,
            site: Some("Jeju Folk Village"),
            action: "kiosk restarted",
            target: "KIOSK-014",
            age_minutes: 420,
            label: "7 hours ago",
            status: AuditStatus::Success,
            message: "Kiosk recovered after a scheduled restart.",
        },
        Row {
            kind: AuditKind::System,
            site: None,
            action: "index rebuild",
            target: "Search_Index",
            age_minutes: 600,
            label: "10 hours ago",
            status: AuditStatus::Success,
            message: "Knowledge-base search index was rebuilt.",
        },
        Row {
            kind: AuditKind::Device,
            site: Some("Seoul Land"),
            action: "fault detected",
            target: "KIOSK-021",
            age_minutes: 780,
            label: "13 hours ago",
            status: AuditStatus::Error,
            message: "Kiosk display is unresponsive.",
        },
        Row {
            kind: AuditKind::User,
            site: Some("Busan Haeundae Tourist Zone"),
            action: "site deactivated",
            target: "SITE-007",
            age_minutes: 1440,
            label: "1 day ago",
            status: AuditStatus::Warning,
            message: "Site was deactivated by an administrator.",
        },
    ];

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| AuditLogEntry {
            id: EntryId::new(u64::try_from(index).unwrap_or(0) + 1),
            kind: row.kind,
            site: row.site.map(str::to_owned),
            action: row.action.to_owned(),
            target: row.target.to_owned(),
            status: row.status,
            message: row.message.to_owned(),
            occurred_at: now - Duration::minutes(row.age_minutes),
            time_label: row.label.to_owned(),
        })
        .collect()
}

/// Knowledge-base uploads, newest-first.
pub fn documents() -> Vec<DocumentEntry> {
    let rows: [(&str, &str, DocumentStatus, &str, DateTime<Utc>); 6] = [
        ("doc-014", "haeundae-beach-guide.pdf", DocumentStatus::Processing, "4.1 MB", stamp(2026, 2, 11, 10, 20)),
        ("doc-013", "lotte-world-faq.docx", DocumentStatus::Completed, "780 KB", stamp(2026, 2, 10, 16, 45)),
        ("doc-012", "gyeongbokgung-history.pdf", DocumentStatus::Completed, "2.3 MB", stamp(2026, 2, 10, 9, 5)),
        ("doc-011", "jeju-folklore-notes.txt", DocumentStatus::Failed, "54 KB", stamp(2026, 2, 9, 14, 30)),
        ("doc-010", "everland-ride-schedule.xlsx", DocumentStatus::Completed, "310 KB", stamp(2026, 2, 8, 11, 0)),
        ("doc-009", "namsan-tower-hours.pdf", DocumentStatus::Pending, "120 KB", stamp(2026, 2, 8, 8, 15)),
    ];

    rows.into_iter()
        .map(|(id, file_name, status, size, uploaded_at)| DocumentEntry {
            id: id.to_owned(),
            file_name: file_name.to_owned(),
            status,
            size: size.to_owned(),
            uploaded_at,
        })
        .collect()
}

/// The two demo operators the console recognizes.
pub fn operators() -> Vec<Operator> {
    vec![
        Operator {
            admin_id: 1,
            email: "admin@guideon.com".into(),
            role: AdminRole::PlatformAdmin,
            site_ids: Vec::new(),
        },
        Operator {
            admin_id: 2,
            email: "operator@example.com".into(),
            role: AdminRole::SiteAdmin,
            site_ids: vec![SiteId::new(1)],
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sites_are_newest_first_with_unique_ids() {
        let sites = sites();
        assert_eq!(sites.len(), 8);
        assert_eq!(sites[0].id, SiteId::new(8));
        assert_eq!(sites[7].id, SiteId::new(1));
        let mut ids: Vec<u64> = sites.iter().map(|s| s.id.get()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn audit_entries_are_anchored_to_now() {
        let now = Utc.with_ymd_and_hms(2026, 2, 12, 12, 0, 0).unwrap();
        let entries = audit_entries(now);
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].occurred_at, now);
        assert!(entries.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));
    }

    #[test]
    fn seeded_invite_references_a_seeded_site() {
        let invites = invites();
        let sites = sites();
        assert!(invites.iter().all(|i| sites.iter().any(|s| s.id == i.site_id)));
    }
}
