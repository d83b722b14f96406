//! Execution parameters of a paired long/short trade.

use rust_decimal::Decimal;

use super::money::{Balance, Price, Volume};

/// Parameters of an entry into a long/short position pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTrade {
    /// Spread at which the position should be closed.
    pub exit_target: Decimal,
    pub long_volume: Volume,
    pub long_limit_price: Price,
    pub short_volume: Volume,
    pub short_limit_price: Price,
}

/// Parameters of an exit from a long/short position pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitTrade {
    pub long_volume: Volume,
    pub long_limit_price: Price,
    pub short_volume: Volume,
    pub short_limit_price: Price,
    /// Combined account balance across both exchanges when the position opened.
    pub entry_balance: Balance,
    /// Combined account balance across both exchanges after the close.
    pub updated_balance: Balance,
}

impl ExitTrade {
    /// Realized profit: updated balance minus entry balance.
    ///
    /// `None` if the difference does not fit in a decimal.
    #[must_use]
    pub fn profit(&self) -> Option<Decimal> {
        self.updated_balance.checked_sub(self.entry_balance)
    }
}
