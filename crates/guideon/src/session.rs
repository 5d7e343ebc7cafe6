//! In-memory admin session over the seeded demo dataset.
//!
//! Mirrors the web console's mock mode: each invocation owns its stores,
//! mutations are applied and rendered within the invocation, and nothing
//! persists. When the platform backend lands, this is the seam where
//! store construction swaps seeds for API calls.

use chrono::Utc;

use guideon_core::{AuditTrail, DocumentLedger, Operator, SiteDirectory, seed};

pub struct Session {
    pub sites: SiteDirectory,
    pub audit: AuditTrail,
    pub documents: DocumentLedger,
}

impl Session {
    /// Seed a session scoped to what `operator` may administer. Sites
    /// (and their invites) outside the operator's scope never enter the
    /// directory; the audit trail and document ledger are platform-wide
    /// views.
    pub fn seeded(page_size: usize, operator: &Operator) -> Self {
        let mut sites = seed::sites();
        sites.retain(|site| operator.can_access(site.id));
        let mut invites = seed::invites();
        invites.retain(|invite| operator.can_access(invite.site_id));

        Self {
            sites: SiteDirectory::with_seed(sites, invites).with_page_size(page_size),
            audit: AuditTrail::with_entries(seed::audit_entries(Utc::now()))
                .with_page_size(page_size),
            documents: DocumentLedger::with_entries(seed::documents()).with_page_size(page_size),
        }
    }
}
