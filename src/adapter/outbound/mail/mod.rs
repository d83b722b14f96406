//! Mail delivery adapters.
//!
//! Implements the `port::Mailer` trait for real delivery backends. The
//! logging and no-op mailers live next to the port.

pub mod relay;

pub use relay::RelayMailer;
