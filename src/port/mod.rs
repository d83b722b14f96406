//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (exchange APIs, mail delivery, time).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Balance │            │    Clock    │              │  Mailer   │
//! │ Source  │            │             │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`BalanceSource`] - Live account balance queries against an exchange
//! - [`Clock`] - Wall-clock time source
//! - [`Mailer`] - Outbound mail delivery

pub mod outbound;

pub use outbound::clock::{Clock, SystemClock};
pub use outbound::exchange::BalanceSource;
pub use outbound::mailer::{LogMailer, MailMessage, Mailer, NullMailer};
