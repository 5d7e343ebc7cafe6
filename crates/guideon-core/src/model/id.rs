// ── Identity types ──
//
// Numeric newtype identities for each collection. Allocation is
// max-existing-plus-one (see `EntityCollection::next_id`), so ids are
// unique for the lifetime of a session and never recycled; deleting the
// highest entity admits a gap on the next allocation.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }
    };
}

numeric_id! {
    /// Identity of a [`Site`](super::Site). Immutable for the site's lifetime.
    SiteId
}

numeric_id! {
    /// Identity of a [`SiteInvite`](super::SiteInvite). Allocated from the
    /// invites' own counter, independent of [`SiteId`].
    InviteId
}

numeric_id! {
    /// Identity of an [`AuditLogEntry`](super::AuditLogEntry).
    EntryId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn site_id_roundtrips_through_u64() {
        let id = SiteId::from(42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn site_id_display() {
        assert_eq!(SiteId::new(7).to_string(), "7");
    }

    #[test]
    fn site_id_from_str() {
        let id: SiteId = "13".parse().unwrap();
        assert_eq!(id, SiteId::new(13));
        assert!("thirteen".parse::<SiteId>().is_err());
    }

    #[test]
    fn id_kinds_are_distinct_types() {
        // Same raw value, different identity spaces.
        let site = SiteId::new(1);
        let invite = InviteId::new(1);
        assert_eq!(site.get(), invite.get());
    }
}
