//! Balance polling configuration.

use std::time::Duration;

use serde::Deserialize;

/// How often balances are polled and how long a live fetch may take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BalanceConfig {
    /// Seconds between polling rounds (default: 60).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Upper bound on a single live fetch in seconds (default: 10).
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

const fn default_poll_interval_secs() -> u64 {
    60
}

const fn default_fetch_timeout_secs() -> u64 {
    10
}

impl BalanceConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}
