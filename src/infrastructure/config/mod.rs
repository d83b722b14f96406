//! Infrastructure configuration modules.

pub mod balance;
pub mod exchange;
pub mod logging;
pub mod notification;
pub mod settings;

pub use settings::Config;
