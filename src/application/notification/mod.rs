//! Trade entry/exit notifications.
//!
//! - [`report`]: Renders plain-text entry and exit reports
//! - [`service::NotificationService`]: Fire-and-forget email dispatch

pub mod report;
pub mod service;

use serde::Deserialize;

pub use report::{entry_report, exit_report, SUBJECT_NEW_ENTRY, SUBJECT_NEW_EXIT};
pub use service::NotificationService;

/// Email notification settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmailConfig {
    /// Send trade reports by email.
    #[serde(default)]
    pub active: bool,
    /// Recipient address.
    #[serde(default)]
    pub to: String,
    /// Sender address.
    #[serde(default)]
    pub from: String,
}
