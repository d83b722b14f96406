//! Market-related domain types.
//!
//! - [`CurrencyPair`] - The traded instrument, e.g. `BTC/USD`
//! - [`Ticker`] - Top-of-book snapshot for one exchange

use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::Price;

/// A base/counter currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    base: String,
    counter: String,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(base: impl Into<String>, counter: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            counter: counter.into(),
        }
    }

    /// The currency being bought or sold.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The currency the base is priced in.
    #[must_use]
    pub fn counter(&self) -> &str {
        &self.counter
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

/// Best bid and ask observed on an exchange at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    bid: Price,
    ask: Price,
}

impl Ticker {
    /// Create a ticker snapshot.
    #[must_use]
    pub const fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }

    /// Highest price a buyer is currently willing to pay.
    #[must_use]
    pub const fn bid(&self) -> Price {
        self.bid
    }

    /// Lowest price a seller is currently willing to accept.
    #[must_use]
    pub const fn ask(&self) -> Price {
        self.ask
    }
}
