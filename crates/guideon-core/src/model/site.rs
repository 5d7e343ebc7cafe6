// ── Site domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::SiteId;

/// A managed tourism site (palace, theme park, special tourist zone, ...).
///
/// New sites start active; `updated_at` is refreshed by every mutation
/// (rename, activation toggle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    /// Display name, 1-100 characters after trimming.
    pub name: String,
    /// Whether kiosks at this site are serving visitors.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Typed mutation requests ─────────────────────────────────────────
//
// Each request corresponds 1:1 to a platform API endpoint
// (create -> POST /sites, update -> PATCH /sites/{id}).

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSiteRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSiteRequest {
    pub name: String,
}
