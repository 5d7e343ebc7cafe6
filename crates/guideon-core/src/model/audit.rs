// ── Audit log domain types ──
//
// Entries are produced by other subsystems (site CRUD, kiosk health
// monitoring, platform jobs) and are read-only here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::id::EntryId;

/// Which subsystem produced an audit entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuditKind {
    System,
    User,
    Device,
}

/// Outcome severity of the recorded action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuditStatus {
    Success,
    Warning,
    Error,
}

/// One recorded platform action.
///
/// `occurred_at` is the real event timestamp and is what date-range
/// filtering operates on; `time_label` is the relative string the admin
/// console renders ("just now", "10 minutes ago") and is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: EntryId,
    pub kind: AuditKind,
    /// Site the action concerns, if any. `None` for platform-wide events.
    pub site: Option<String>,
    pub action: String,
    pub target: String,
    pub status: AuditStatus,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
    pub time_label: String,
}
