//! Paper exchange balances.
//!
//! A [`BalanceSource`] backed by balances declared in configuration, used
//! for dry runs and demos where no exchange API is wired up.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::{Balance, ExchangeId};
use crate::error::{ExchangeError, Result};
use crate::port::BalanceSource;

/// Fixed balances per exchange.
#[derive(Debug, Clone, Default)]
pub struct PaperBalanceSource {
    balances: HashMap<ExchangeId, Balance>,
}

impl PaperBalanceSource {
    /// Create a source serving the given balances.
    pub fn new(balances: impl IntoIterator<Item = (ExchangeId, Balance)>) -> Self {
        Self {
            balances: balances.into_iter().collect(),
        }
    }

    /// Exchanges this source knows about, sorted by name.
    #[must_use]
    pub fn exchanges(&self) -> Vec<ExchangeId> {
        let mut exchanges: Vec<_> = self.balances.keys().cloned().collect();
        exchanges.sort();
        exchanges
    }
}

#[async_trait]
impl BalanceSource for PaperBalanceSource {
    async fn fetch_balance(&self, exchange: &ExchangeId) -> Result<Balance> {
        let balance = self
            .balances
            .get(exchange)
            .copied()
            .ok_or_else(|| ExchangeError::UnknownExchange {
                exchange: exchange.clone(),
            })?;

        trace!(exchange = %exchange, balance = %balance, "Paper balance served");
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn serves_configured_balances() {
        let source = PaperBalanceSource::new([
            (ExchangeId::new("CoinSnake"), dec!(987.65)),
            (ExchangeId::new("CoinDynasty"), dec!(123.45)),
        ]);

        assert_eq!(
            source.fetch_balance(&ExchangeId::new("CoinDynasty")).await.unwrap(),
            dec!(123.45)
        );
        assert_eq!(
            source.exchanges(),
            vec![ExchangeId::new("CoinDynasty"), ExchangeId::new("CoinSnake")]
        );
    }

    #[tokio::test]
    async fn unknown_exchange_fails() {
        let source = PaperBalanceSource::default();
        assert!(source.fetch_balance(&ExchangeId::new("Nowhere")).await.is_err());
    }
}
