//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] - `ManualClock`, a [`Clock`](crate::port::Clock) moved by hand.
//! - [`domain`] - Builders for domain primitives: exchanges, spreads, trades.
//! - [`exchange`] - `CountingBalanceSource`, a scripted balance source.
//! - [`log`] - `LogCapture`, formatted tracing output collected in memory.
//! - [`mailer`] - `RecordingMailer` and `FailingMailer`.

pub mod clock;
pub mod domain;
pub mod exchange;
pub mod log;
pub mod mailer;
