//! Exchange port for account balance queries.
//!
//! The balance cache never talks to an exchange directly; the balance service
//! goes through this trait when the cache has nothing fresh.

use async_trait::async_trait;

use crate::domain::{Balance, ExchangeId};
use crate::error::Error;

/// Live balance query against a configured exchange connection.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the current account balance for `exchange` in the reporting currency.
    async fn fetch_balance(&self, exchange: &ExchangeId) -> Result<Balance, Error>;
}
