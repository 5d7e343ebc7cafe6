// ── View-model composition ──

use serde::Serialize;

use crate::model::{Site, SiteInvite};

/// Display row for the site management table: a site plus the invites
/// referencing it.
///
/// Joined after pagination -- only the visible page's sites pay the join
/// cost. The site never owns its invites; this row is assembled at read
/// time.
#[derive(Debug, Clone, Serialize)]
pub struct SiteWithInvites {
    #[serde(flatten)]
    pub site: Site,
    pub invites: Vec<SiteInvite>,
}
