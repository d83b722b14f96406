//! Domain validation errors for core domain types.
//!
//! Returned by constructors that validate their inputs.
//!
//! # Examples
//!
//! ```
//! use spreadbot::domain::error::DomainError;
//! use spreadbot::domain::{CurrencyPair, ExchangeId, Spread, Ticker};
//! use rust_decimal_macros::dec;
//!
//! let result = Spread::new(
//!     CurrencyPair::new("BTC", "USD"),
//!     ExchangeId::new("CoinDynasty"),
//!     ExchangeId::new("CoinSnake"),
//!     Ticker::new(dec!(0), dec!(0)), // zero ask on the long side
//!     Ticker::new(dec!(100), dec!(101)),
//! );
//!
//! assert!(matches!(result, Err(DomainError::ZeroPrice { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A spread cannot be computed against a zero reference price.
    #[error("{side} price must be non-zero to compute a spread")]
    ZeroPrice {
        /// Which ticker field was zero (e.g. "long ask").
        side: &'static str,
    },

    /// A computed amount does not fit in a decimal.
    #[error("{quantity} overflows")]
    Overflow {
        /// What was being computed (e.g. "spread in").
        quantity: &'static str,
    },
}
