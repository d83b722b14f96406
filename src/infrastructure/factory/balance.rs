//! Balance service and poller factory.

use std::sync::Arc;

use crate::adapter::outbound::paper::PaperBalanceSource;
use crate::application::balance::{BalancePoller, BalanceService};
use crate::application::cache::BalanceCache;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::BalanceSource;

/// Build a paper balance source from the configured exchanges.
#[must_use]
pub fn build_paper_source(config: &Config) -> PaperBalanceSource {
    PaperBalanceSource::new(
        config
            .exchanges
            .iter()
            .map(|exchange| (exchange.id(), exchange.paper_balance)),
    )
}

/// Build the balance service over a fresh cache.
#[must_use]
pub fn build_balance_service(config: &Config, source: Arc<dyn BalanceSource>) -> Arc<BalanceService> {
    let cache = Arc::new(BalanceCache::new());
    Arc::new(BalanceService::new(cache, source).with_fetch_timeout(config.balance.fetch_timeout()))
}

/// Build a poller covering every configured exchange.
///
/// # Errors
///
/// Returns an error if the poll interval is zero.
pub fn build_poller(config: &Config, service: Arc<BalanceService>) -> Result<BalancePoller> {
    BalancePoller::new(service, config.exchange_ids(), config.balance.poll_interval())
}
