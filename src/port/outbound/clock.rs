//! Time source port.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
///
/// Caches evaluate freshness against this at read time, so tests can swap in
/// a manually advanced clock instead of sleeping.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
