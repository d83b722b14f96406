//! Outbound adapters (driven side).

pub mod mail;
pub mod paper;
