//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`ExchangeId`], [`Spread`] and the
//! trade parameter types so tests focus on assertions rather than
//! construction boilerplate.

use rust_decimal_macros::dec;

use crate::domain::{CurrencyPair, EntryTrade, ExchangeId, ExitTrade, Spread, Ticker};

/// Create an [`ExchangeId`] from a name.
pub fn exchange(name: &str) -> ExchangeId {
    ExchangeId::new(name)
}

/// Generate `n` exchange IDs named `exchange-0`, `exchange-1`, ...
pub fn make_exchanges(n: usize) -> Vec<ExchangeId> {
    (0..n).map(|i| ExchangeId::new(format!("exchange-{i}"))).collect()
}

/// BTC/USD spread, long on `CoinDynasty` (99.00/100.00), short on
/// `CoinSnake` (102.00/103.00).
pub fn sample_spread() -> Spread {
    Spread::new(
        CurrencyPair::new("BTC", "USD"),
        exchange("CoinDynasty"),
        exchange("CoinSnake"),
        Ticker::new(dec!(99.00), dec!(100.00)),
        Ticker::new(dec!(102.00), dec!(103.00)),
    )
    .expect("sample spread has non-zero prices")
}

/// Entry at a slight premium to [`sample_spread`]'s tickers.
pub fn entry_trade() -> EntryTrade {
    EntryTrade {
        exit_target: dec!(0.005),
        long_volume: dec!(0.50),
        long_limit_price: dec!(100.10),
        short_volume: dec!(0.50),
        short_limit_price: dec!(101.90),
    }
}

/// Exit from [`entry_trade`] with a small profit.
pub fn exit_trade() -> ExitTrade {
    ExitTrade {
        long_volume: dec!(0.50),
        long_limit_price: dec!(98.90),
        short_volume: dec!(0.50),
        short_limit_price: dec!(103.10),
        entry_balance: dec!(1000.00),
        updated_balance: dec!(1003.25),
    }
}
