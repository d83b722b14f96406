//! Notification configuration.

use serde::Deserialize;

use crate::application::notification::EmailConfig;

/// Where and how trade reports are delivered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationConfig {
    /// Email settings.
    #[serde(default)]
    pub email: EmailConfig,
    /// HTTP mail relay endpoint. Mail is only logged when unset.
    #[serde(default)]
    pub relay_url: Option<String>,
}
