//! Mailer and notification service factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::mail::RelayMailer;
use crate::application::notification::NotificationService;
use crate::error::Result;
use crate::infrastructure::config::notification::NotificationConfig;
use crate::port::{LogMailer, Mailer};

/// Build the mailer from configuration.
///
/// Uses the HTTP relay when `relay_url` is set, otherwise logs messages.
///
/// # Errors
///
/// Returns an error if the relay URL does not parse.
pub fn build_mailer(config: &NotificationConfig) -> Result<Arc<dyn Mailer>> {
    match &config.relay_url {
        Some(url) => {
            let mailer = RelayMailer::from_env(url)?;
            info!(url = %mailer.url(), "Mail relay enabled");
            Ok(Arc::new(mailer))
        }
        None => {
            info!("No mail relay configured, mail will be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}

/// Build the notification service and spawn its delivery worker.
///
/// # Errors
///
/// Returns an error if the mailer cannot be built.
pub fn build_notification_service(config: &NotificationConfig) -> Result<NotificationService> {
    let mailer = build_mailer(config)?;
    Ok(NotificationService::new(config.email.clone(), mailer))
}
