//! Scripted [`BalanceSource`] that counts live fetches.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Balance, ExchangeId};
use crate::error::{Error, ExchangeError};
use crate::port::BalanceSource;

/// Balance source with fixed balances, an optional delay, and a call counter.
///
/// Unknown exchanges fail with [`ExchangeError::UnknownExchange`].
#[derive(Debug, Default)]
pub struct CountingBalanceSource {
    balances: RwLock<HashMap<ExchangeId, Balance>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl CountingBalanceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `balance` for the exchange named `name`.
    #[must_use]
    pub fn with_balance(self, name: &str, balance: Balance) -> Self {
        self.balances.write().insert(ExchangeId::new(name), balance);
        self
    }

    /// Sleep this long before answering each fetch.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Change the balance served for `exchange` from now on.
    pub fn set_balance(&self, exchange: ExchangeId, balance: Balance) {
        self.balances.write().insert(exchange, balance);
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceSource for CountingBalanceSource {
    async fn fetch_balance(&self, exchange: &ExchangeId) -> Result<Balance, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let balance = self.balances.read().get(exchange).copied();
        balance.ok_or_else(|| {
            ExchangeError::UnknownExchange {
                exchange: exchange.clone(),
            }
            .into()
        })
    }
}
