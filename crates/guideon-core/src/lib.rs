//! Data layer of the GUIDEON admin console.
//!
//! This crate owns the domain model and the list-view state machinery the
//! console's management screens share:
//!
//! - **Stores** ([`store`]) -- [`SiteDirectory`] is the mutable source of
//!   truth for sites and their operator invites; [`AuditTrail`] and
//!   [`DocumentLedger`] are read-only views over records produced by
//!   other subsystems. All three run the same pipeline: filter the
//!   collection, derive page bounds, slice, and (for sites) join child
//!   records onto the visible rows.
//!
//! - **Filters** ([`filter`]) -- pure predicates plus per-field update
//!   commands. Every filter change resets the page cursor.
//!
//! - **Pagination** ([`page`]) -- fixed-size windows with the cursor
//!   repair rule: after a deletion or filter change the cursor clamps to
//!   the last remaining page (or 0 when nothing matches).
//!
//! - **Scoping** ([`scope`]) -- the platform-admin / site-admin
//!   visibility rule.
//!
//! Everything is synchronous and in-memory. The platform backend exists
//! as an API contract only; until it is wired in, [`seed`] supplies the
//! session dataset and state lives exactly as long as the store values.

pub mod clock;
pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod scope;
pub mod seed;
pub mod store;
pub mod validate;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use clock::{Clock, SystemClock};
pub use error::CoreError;
pub use filter::{
    ActiveStatus, AuditFilter, AuditFilterUpdate, DocumentFilter, SiteFilter, SiteFilterUpdate,
};
pub use page::{DEFAULT_PAGE_SIZE, PageView, Pager};
pub use scope::{AdminRole, Operator};
pub use store::{AuditTrail, DocumentLedger, SiteDirectory};
pub use view::SiteWithInvites;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AuditKind,
    AuditLogEntry,
    AuditStatus,
    CreateSiteRequest,
    DocumentEntry,
    DocumentStatus,
    EntryId,
    InviteId,
    InviteStatus,
    Site,
    SiteId,
    SiteInvite,
    UpdateSiteRequest,
};
