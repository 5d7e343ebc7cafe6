// ── Operator roles and site scoping ──
//
// Platform admins see every site; site admins see only their assigned
// site ids. Login/session transport is the platform backend's concern --
// this module only carries the visibility rule.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::{Site, SiteId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AdminRole {
    PlatformAdmin,
    SiteAdmin,
}

/// An authenticated admin-console user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub admin_id: u64,
    pub email: String,
    pub role: AdminRole,
    /// Assigned sites. Empty (and ignored) for platform admins.
    pub site_ids: Vec<SiteId>,
}

impl Operator {
    pub fn can_access(&self, site_id: SiteId) -> bool {
        match self.role {
            AdminRole::PlatformAdmin => true,
            AdminRole::SiteAdmin => self.site_ids.contains(&site_id),
        }
    }

    /// The subset of `sites` this operator may administer.
    pub fn accessible_sites<'a>(
        &self,
        sites: impl IntoIterator<Item = &'a Site>,
    ) -> Vec<&'a Site> {
        sites
            .into_iter()
            .filter(|site| self.can_access(site.id))
            .collect()
    }
}
