//! Runtime caches used by application services.
//!
//! - [`balance::BalanceCache`]: Latest account balance per exchange with
//!   lazy time-based expiry

pub mod balance;

pub use balance::{cache_timeout, BalanceCache, BalanceEntry, CACHE_TIMEOUT_MS};
