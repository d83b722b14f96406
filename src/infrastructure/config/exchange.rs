//! Exchange connection configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::ExchangeId;

/// One configured exchange connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeConfig {
    /// Display name, also the exchange's identity in the balance cache.
    pub name: String,
    /// Balance served in paper mode.
    #[serde(default)]
    pub paper_balance: Decimal,
}

impl ExchangeConfig {
    #[must_use]
    pub fn id(&self) -> ExchangeId {
        ExchangeId::new(self.name.clone())
    }
}
