//! Cross-exchange spread between a long and a short leg.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::id::ExchangeId;
use super::market::{CurrencyPair, Ticker};
use super::money::Price;

/// A long position on one exchange paired with a short position on another.
///
/// `spread_in` is what an entry would capture right now (buy the long ask,
/// sell the short bid); `spread_out` is what an exit would capture (sell the
/// long bid, buy back the short ask). Both are relative to the long price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    currency_pair: CurrencyPair,
    long_exchange: ExchangeId,
    short_exchange: ExchangeId,
    long_ticker: Ticker,
    short_ticker: Ticker,
    spread_in: Decimal,
    spread_out: Decimal,
}

impl Spread {
    /// Build a spread from both tickers, computing the entry and exit spreads.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroPrice`] if the long ask or long bid is zero,
    /// or [`DomainError::Overflow`] if a price difference does not fit.
    pub fn new(
        currency_pair: CurrencyPair,
        long_exchange: ExchangeId,
        short_exchange: ExchangeId,
        long_ticker: Ticker,
        short_ticker: Ticker,
    ) -> Result<Self, DomainError> {
        let spread_in = relative_spread(long_ticker.ask(), short_ticker.bid(), "long ask", "spread in")?;
        let spread_out =
            relative_spread(long_ticker.bid(), short_ticker.ask(), "long bid", "spread out")?;

        Ok(Self {
            currency_pair,
            long_exchange,
            short_exchange,
            long_ticker,
            short_ticker,
            spread_in,
            spread_out,
        })
    }

    #[must_use]
    pub const fn currency_pair(&self) -> &CurrencyPair {
        &self.currency_pair
    }

    #[must_use]
    pub const fn long_exchange(&self) -> &ExchangeId {
        &self.long_exchange
    }

    #[must_use]
    pub const fn short_exchange(&self) -> &ExchangeId {
        &self.short_exchange
    }

    #[must_use]
    pub const fn long_ticker(&self) -> &Ticker {
        &self.long_ticker
    }

    #[must_use]
    pub const fn short_ticker(&self) -> &Ticker {
        &self.short_ticker
    }

    /// Spread available on entry.
    #[must_use]
    pub const fn spread_in(&self) -> Decimal {
        self.spread_in
    }

    /// Spread available on exit.
    #[must_use]
    pub const fn spread_out(&self) -> Decimal {
        self.spread_out
    }
}

/// `(short - long) / long`.
fn relative_spread(
    long: Price,
    short: Price,
    side: &'static str,
    quantity: &'static str,
) -> Result<Decimal, DomainError> {
    if long.is_zero() {
        return Err(DomainError::ZeroPrice { side });
    }
    short
        .checked_sub(long)
        .and_then(|diff| diff.checked_div(long))
        .ok_or(DomainError::Overflow { quantity })
}
