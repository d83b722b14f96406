//! Balance lookups and polling on top of the balance cache.

pub mod poller;
pub mod service;

pub use poller::{BalancePoller, BalancePollerHandle};
pub use service::{BalanceService, RefreshSummary, DEFAULT_FETCH_TIMEOUT};
