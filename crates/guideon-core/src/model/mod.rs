//! Canonical domain types for the GUIDEON admin console.

mod audit;
mod document;
mod id;
mod invite;
mod site;

pub use audit::{AuditKind, AuditLogEntry, AuditStatus};
pub use document::{DocumentEntry, DocumentStatus};
pub use id::{EntryId, InviteId, SiteId};
pub use invite::{InviteStatus, SiteInvite};
pub use site::{CreateSiteRequest, Site, UpdateSiteRequest};
