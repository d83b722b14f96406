//! Read-through balance lookups.
//!
//! Answers from the [`BalanceCache`] when it holds a fresh value and falls
//! back to a live [`BalanceSource`] query otherwise, writing the fetched value
//! back so the next caller hits the cache.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::application::cache::BalanceCache;
use crate::domain::error::DomainError;
use crate::domain::{Balance, ExchangeId};
use crate::error::{ExchangeError, Result};
use crate::port::BalanceSource;

/// Default upper bound on a single live balance fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of refreshing a set of exchanges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Exchanges whose balance was fetched and cached.
    pub refreshed: usize,
    /// Exchanges whose fetch failed or timed out.
    pub failed: usize,
}

/// Balance lookups backed by the cache with live fallback.
pub struct BalanceService {
    cache: Arc<BalanceCache>,
    source: Arc<dyn BalanceSource>,
    fetch_timeout: Duration,
}

impl BalanceService {
    /// Create a service over a shared cache and balance source.
    pub fn new(cache: Arc<BalanceCache>, source: Arc<dyn BalanceSource>) -> Self {
        Self {
            cache,
            source,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Override the live fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// The underlying cache.
    #[must_use]
    pub fn cache(&self) -> &Arc<BalanceCache> {
        &self.cache
    }

    /// Current balance for `exchange`, served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache has no fresh value and the live fetch
    /// fails or times out. The cache is left untouched in that case.
    pub async fn balance(&self, exchange: &ExchangeId) -> Result<Balance> {
        if let Some(value) = self.cache.get(exchange) {
            debug!(exchange = %exchange, balance = %value, "Balance cache hit");
            return Ok(value);
        }

        debug!(exchange = %exchange, "Balance cache miss, fetching live");
        self.refresh(exchange).await
    }

    /// Fetch the live balance for `exchange` and cache it.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or exceeds the fetch timeout.
    pub async fn refresh(&self, exchange: &ExchangeId) -> Result<Balance> {
        let value = tokio::time::timeout(self.fetch_timeout, self.source.fetch_balance(exchange))
            .await
            .map_err(|_| ExchangeError::Timeout {
                exchange: exchange.clone(),
                timeout_ms: u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX),
            })??;

        self.cache.set(exchange.clone(), value);
        Ok(value)
    }

    /// Refresh every listed exchange concurrently.
    ///
    /// A failure on one exchange is logged and counted; it does not stop the
    /// others from being refreshed.
    pub async fn refresh_all(&self, exchanges: &[ExchangeId]) -> RefreshSummary {
        let results = join_all(exchanges.iter().map(|exchange| self.refresh(exchange))).await;

        let mut summary = RefreshSummary::default();
        for (exchange, result) in exchanges.iter().zip(results) {
            match result {
                Ok(value) => {
                    debug!(exchange = %exchange, balance = %value, "Balance refreshed");
                    summary.refreshed += 1;
                }
                Err(e) => {
                    warn!(exchange = %exchange, error = %e, "Balance refresh failed");
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Sum of the current balances of every listed exchange.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while resolving any exchange's balance,
    /// or [`DomainError::Overflow`] if the sum does not fit.
    pub async fn combined_balance(&self, exchanges: &[ExchangeId]) -> Result<Balance> {
        let mut total = Decimal::ZERO;
        for exchange in exchanges {
            let value = self.balance(exchange).await?;
            total = total.checked_add(value).ok_or(DomainError::Overflow {
                quantity: "combined balance",
            })?;
        }
        Ok(total)
    }
}
