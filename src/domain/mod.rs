//! Exchange-agnostic domain types.

pub mod error;
pub mod id;
pub mod market;
pub mod money;
pub mod spread;
pub mod trade;

pub use id::ExchangeId;
pub use market::{CurrencyPair, Ticker};
pub use money::{Balance, Price, Volume, REPORTING_CURRENCY_SYMBOL};
pub use spread::Spread;
pub use trade::{EntryTrade, ExitTrade};
