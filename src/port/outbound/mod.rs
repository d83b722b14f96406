//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies such as exchange
//! balance queries, mail delivery and the time source.

pub mod clock;
pub mod exchange;
pub mod mailer;
