//! Spreadbot - balance caching and trade notifications for cross-exchange
//! arbitrage.
//!
//! The trading loop needs account balances on every decision, but exchange
//! balance endpoints are slow and rate limited. This crate keeps the latest
//! balance per exchange in a time-bounded cache, refreshes it in the
//! background, and falls back to a live query only when nothing fresh is
//! cached. It also renders and mails trade entry/exit reports.
//!
//! # Architecture
//!
//! - **`domain`** - Exchange identities, tickers, spreads and trade parameters
//! - **`port`** - Traits for balance sources, mail delivery and time
//! - **`application::cache`** - [`BalanceCache`](application::cache::BalanceCache)
//!   with lazy expiry after [`CACHE_TIMEOUT_MS`](application::cache::CACHE_TIMEOUT_MS)
//! - **`application::balance`** - Read-through balance service and poller
//! - **`application::notification`** - Entry/exit reports and email dispatch
//! - **`adapter`** - CLI, paper balances, HTTP mail relay
//! - **`infrastructure`** - Configuration and wiring
//!
//! # Features
//!
//! - `testkit` - Expose test doubles (`ManualClock`, `RecordingMailer`, ...)
//!
//! # Example
//!
//! ```
//! use spreadbot::application::cache::BalanceCache;
//! use spreadbot::domain::ExchangeId;
//! use rust_decimal_macros::dec;
//!
//! let cache = BalanceCache::new();
//! let exchange = ExchangeId::new("CoinDynasty");
//!
//! cache.set(exchange.clone(), dec!(123.45));
//! assert_eq!(cache.get(&exchange), Some(dec!(123.45)));
//! assert_eq!(cache.get(&ExchangeId::new("CoinSnake")), None);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
