// ── Entity stores ──
//
// One store per admin list view. `SiteDirectory` is the mutable
// instance; `AuditTrail` and `DocumentLedger` are read-only instances of
// the same filter/paginate shape.

pub(crate) mod collection;

mod audit;
mod documents;
mod sites;

pub use audit::AuditTrail;
pub use collection::{Entity, EntityCollection};
pub use documents::DocumentLedger;
pub use sites::SiteDirectory;
