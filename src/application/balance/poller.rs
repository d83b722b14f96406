//! Periodic balance polling.
//!
//! Keeps the balance cache warm by refreshing every configured exchange on a
//! fixed interval, so the trading loop rarely has to wait on a live fetch.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::service::{BalanceService, RefreshSummary};
use crate::domain::ExchangeId;
use crate::error::{ConfigError, Result};

/// Handle for controlling the poller lifecycle.
pub struct BalancePollerHandle {
    /// Channel for sending shutdown signal.
    shutdown_tx: mpsc::Sender<()>,
    /// Latest completed refresh round.
    summary_rx: watch::Receiver<RefreshSummary>,
}

impl BalancePollerHandle {
    /// Signal the poller to stop after the current round.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }

    /// Subscribe to refresh round results.
    #[must_use]
    pub fn summaries(&self) -> watch::Receiver<RefreshSummary> {
        self.summary_rx.clone()
    }
}

/// Background task refreshing a fixed set of exchanges.
pub struct BalancePoller {
    service: Arc<BalanceService>,
    exchanges: Vec<ExchangeId>,
    interval: Duration,
}

impl BalancePoller {
    /// Create a poller for `exchanges`, refreshing every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` is zero.
    pub fn new(
        service: Arc<BalanceService>,
        exchanges: Vec<ExchangeId>,
        interval: Duration,
    ) -> Result<Self> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(Self {
            service,
            exchanges,
            interval,
        })
    }

    /// Run one refresh round and log its outcome.
    pub async fn poll_once(&self) -> RefreshSummary {
        let summary = self.service.refresh_all(&self.exchanges).await;

        match self.service.cache().combined(&self.exchanges) {
            Some(total) => info!(
                refreshed = summary.refreshed,
                failed = summary.failed,
                combined = %total,
                "Balances polled"
            ),
            None => warn!(
                refreshed = summary.refreshed,
                failed = summary.failed,
                "Balances polled, combined balance unknown"
            ),
        }

        summary
    }

    /// Start polling in the background.
    ///
    /// The first round runs immediately; later rounds follow the interval.
    /// A round that overruns the interval delays the next one rather than
    /// stacking up.
    pub fn start(self) -> BalancePollerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let (summary_tx, summary_rx) = watch::channel(RefreshSummary::default());

        info!(
            exchanges = self.exchanges.len(),
            interval_secs = self.interval.as_secs(),
            "Balance poller started"
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!("Balance poller shutting down");
                        break;
                    }

                    _ = ticker.tick() => {
                        let summary = self.poll_once().await;
                        if summary_tx.send(summary).is_err() {
                            debug!("No summary subscribers left");
                        }
                    }
                }
            }
        });

        BalancePollerHandle {
            shutdown_tx,
            summary_rx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cache::BalanceCache;
    use crate::testkit::exchange::CountingBalanceSource;
    use rust_decimal_macros::dec;

    fn poller(source: Arc<CountingBalanceSource>, interval: Duration) -> BalancePoller {
        let service = Arc::new(BalanceService::new(Arc::new(BalanceCache::new()), source));
        BalancePoller::new(
            service,
            vec![ExchangeId::new("CoinDynasty"), ExchangeId::new("CoinSnake")],
            interval,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn poll_once_fills_cache() {
        let source = Arc::new(
            CountingBalanceSource::new()
                .with_balance("CoinDynasty", dec!(123.45))
                .with_balance("CoinSnake", dec!(987.65)),
        );
        let poller = poller(source, Duration::from_secs(60));

        let summary = poller.poll_once().await;

        assert_eq!(summary.refreshed, 2);
        assert_eq!(
            poller.service.cache().get(&ExchangeId::new("CoinSnake")),
            Some(dec!(987.65))
        );
    }

    #[tokio::test]
    async fn started_poller_refreshes_until_shutdown() {
        let source = Arc::new(
            CountingBalanceSource::new()
                .with_balance("CoinDynasty", dec!(1))
                .with_balance("CoinSnake", dec!(2)),
        );
        let handle = poller(source.clone(), Duration::from_millis(10)).start();
        let mut summaries = handle.summaries();

        summaries.changed().await.unwrap();
        assert_eq!(summaries.borrow().refreshed, 2);

        // Wait for a second round before stopping.
        summaries.changed().await.unwrap();
        handle.shutdown().await;

        assert!(source.calls() >= 4);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let service = Arc::new(BalanceService::new(
            Arc::new(BalanceCache::new()),
            Arc::new(CountingBalanceSource::new()),
        ));

        let result = BalancePoller::new(service, vec![ExchangeId::new("CoinDynasty")], Duration::ZERO);

        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "poll_interval",
                ..
            }))
        ));
    }
}
