// ── Time source ──
//
// Stores stamp `created_at` / `updated_at` through an injected clock so
// that timestamp ordering is observable in tests. Production code uses
// `SystemClock`.

use chrono::{DateTime, Utc};

/// Source of the current time for timestamp stamping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via `chrono::Utc::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
