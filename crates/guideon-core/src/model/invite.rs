// ── Site operator invite ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::id::{InviteId, SiteId};

/// Lifecycle state of an operator invite.
///
/// New invites always start `Pending`. Acceptance and expiry are driven by
/// the platform backend; this core never transitions the state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InviteStatus {
    Pending,
    Accepted,
    Expired,
}

/// An offer of operator access to a [`Site`](super::Site).
///
/// Invites reference their site by id and are joined onto site rows at
/// read time -- the site itself never owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInvite {
    pub id: InviteId,
    pub site_id: SiteId,
    pub email: String,
    pub status: InviteStatus,
    pub created_at: DateTime<Utc>,
}
