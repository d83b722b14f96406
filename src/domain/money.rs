//! Monetary types for price, volume and balance representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Account balance in the reporting currency.
pub type Balance = Decimal;

/// Symbol of the fixed reporting currency (USD).
pub const REPORTING_CURRENCY_SYMBOL: &str = "$";
