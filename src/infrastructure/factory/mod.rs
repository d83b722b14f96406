//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`balance`] - Balance source, service and poller construction
//! - [`mailer`] - Mailer and notification service construction

pub mod balance;
pub mod mailer;
