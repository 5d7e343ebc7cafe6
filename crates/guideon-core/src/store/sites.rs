// ── Site directory store ──
//
// Single source of truth for the site collection and its invite children
// for the lifetime of an admin session. No persistence: the platform
// backend is not wired in yet, so state lives and dies with the session.
//
// Derived read values (filtered set, page bounds, joined rows) are
// recomputed on read; the page cursor is the only derived-adjacent state,
// and it is re-clamped exactly on the contract's trigger events.

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::filter::{SiteFilter, SiteFilterUpdate};
use crate::model::{
    CreateSiteRequest, InviteId, InviteStatus, Site, SiteId, SiteInvite, UpdateSiteRequest,
};
use crate::page::{PageView, Pager};
use crate::store::collection::{Entity, EntityCollection};
use crate::validate;
use crate::view::SiteWithInvites;

impl Entity for Site {
    type Id = SiteId;

    fn id(&self) -> SiteId {
        self.id
    }
}

impl Entity for SiteInvite {
    type Id = InviteId;

    fn id(&self) -> InviteId {
        self.id
    }
}

/// In-memory store for sites and their operator invites.
///
/// Owned and injectable: every consumer (CLI session, test) constructs
/// its own instance, so there is no ambient state to contaminate.
pub struct SiteDirectory {
    sites: EntityCollection<Site>,
    invites: EntityCollection<SiteInvite>,
    filter: SiteFilter,
    pager: Pager,
    clock: Box<dyn Clock>,
}

impl SiteDirectory {
    pub fn new() -> Self {
        Self::with_seed(Vec::new(), Vec::new())
    }

    /// Build a directory over an existing dataset. `sites` are taken as
    /// already newest-first; `invites` keep arrival order.
    pub fn with_seed(sites: Vec<Site>, invites: Vec<SiteInvite>) -> Self {
        Self {
            sites: EntityCollection::with_items(sites),
            invites: EntityCollection::with_items(invites),
            filter: SiteFilter::default(),
            pager: Pager::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source (tests use a stepping clock).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Override the rows-per-page constant for this instance.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager = Pager::new(page_size);
        self
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The current page of display rows: filter, slice, then join the
    /// invites onto the visible sites only.
    pub fn page(&self) -> PageView<SiteWithInvites> {
        let filtered: Vec<&Site> = self.sites.iter().filter(|s| self.filter.matches(s)).collect();
        let total_count = filtered.len();
        let total_pages = self.pager.total_pages(total_count);

        let rows = self
            .pager
            .slice(&filtered)
            .iter()
            .map(|site| SiteWithInvites {
                site: (*site).clone(),
                invites: self.invites_for(site.id).into_iter().cloned().collect(),
            })
            .collect();

        PageView {
            rows,
            page: self.pager.page(),
            total_pages,
            total_count,
        }
    }

    pub fn get(&self, id: SiteId) -> Option<&Site> {
        self.sites.get(id)
    }

    pub fn invites_for(&self, id: SiteId) -> Vec<&SiteInvite> {
        self.invites.iter().filter(|i| i.site_id == id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter()
    }

    pub fn filter(&self) -> &SiteFilter {
        &self.filter
    }

    pub fn page_index(&self) -> usize {
        self.pager.page()
    }

    /// Size of the whole collection, ignoring the filter.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    // ── Filter / cursor ──────────────────────────────────────────────

    /// Apply one filter-field update. Always resets the cursor to page 0.
    pub fn update_filter(&mut self, update: SiteFilterUpdate) {
        update.apply(&mut self.filter);
        self.pager.reset();
    }

    /// Move the page cursor. The caller offers only valid page numbers;
    /// no clamping happens here by contract.
    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create a site with the next available id and fresh timestamps,
    /// inserted at the head of the collection. New sites start active.
    pub fn create(&mut self, request: &CreateSiteRequest) -> Result<SiteId, CoreError> {
        let name = validate::site_name(&request.name)?;
        let now = self.clock.now();
        let id = self.sites.next_id();
        self.sites.insert_front(Site {
            id,
            name,
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        tracing::debug!(site = %id, "site created");
        Ok(id)
    }

    /// Rename a site, refreshing `updated_at`. Other sites are untouched.
    pub fn update(&mut self, id: SiteId, request: &UpdateSiteRequest) -> Result<(), CoreError> {
        let name = validate::site_name(&request.name)?;
        let now = self.clock.now();
        if !self.sites.update(id, |site| {
            site.name = name;
            site.updated_at = now;
        }) {
            return Err(CoreError::not_found("site", id));
        }
        tracing::debug!(site = %id, "site renamed");
        Ok(())
    }

    /// Flip the activation flag, refreshing `updated_at`. Returns the new
    /// state. Reversible; confirmation is the UI layer's job.
    pub fn toggle_active(&mut self, id: SiteId) -> Result<bool, CoreError> {
        let now = self.clock.now();
        let mut new_state = false;
        if !self.sites.update(id, |site| {
            site.is_active = !site.is_active;
            site.updated_at = now;
            new_state = site.is_active;
        }) {
            return Err(CoreError::not_found("site", id));
        }
        tracing::debug!(site = %id, active = new_state, "site toggled");
        Ok(new_state)
    }

    /// Remove a site, then re-clamp the cursor against the shrunk
    /// filtered set. Terminal: there is no undelete. Invites referencing
    /// the site are kept (they are never deleted in this core).
    pub fn remove(&mut self, id: SiteId) -> Result<(), CoreError> {
        if self.sites.remove(id).is_none() {
            return Err(CoreError::not_found("site", id));
        }
        let remaining = self.sites.iter().filter(|s| self.filter.matches(s)).count();
        self.pager.clamp(remaining);
        tracing::debug!(site = %id, "site removed");
        Ok(())
    }

    /// Record a pending operator invite for an existing site. The invite
    /// id comes from the invites' own counter.
    pub fn invite_operator(&mut self, site_id: SiteId, email: &str) -> Result<InviteId, CoreError> {
        let email = validate::email(email)?;
        if !self.sites.contains(site_id) {
            return Err(CoreError::not_found("site", site_id));
        }
        let id = self.invites.next_id();
        self.invites.push(SiteInvite {
            id,
            site_id,
            email,
            status: InviteStatus::Pending,
            created_at: self.clock.now(),
        });
        tracing::debug!(site = %site_id, invite = %id, "operator invited");
        Ok(id)
    }
}

impl Default for SiteDirectory {
    fn default() -> Self {
        Self::new()
    }
}
