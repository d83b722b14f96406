//! Email dispatch for trade reports.
//!
//! Reports are queued onto a channel and delivered by a background worker,
//! so a slow or failing mail backend never holds up the trade decision that
//! produced the report.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::report::{entry_report, exit_report, SUBJECT_NEW_ENTRY, SUBJECT_NEW_EXIT};
use super::EmailConfig;
use crate::domain::{EntryTrade, ExitTrade, Spread};
use crate::port::{MailMessage, Mailer};

/// Sends trade reports by email when enabled.
pub struct NotificationService {
    config: EmailConfig,
    /// Channel sender for queuing outbound mail.
    sender: mpsc::UnboundedSender<MailMessage>,
}

impl NotificationService {
    /// Create the service and spawn its delivery worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(config: EmailConfig, mailer: Arc<dyn Mailer>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        tokio::spawn(mail_worker(mailer, receiver));

        Self { config, sender }
    }

    /// Whether email notifications are turned on.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.config.active
    }

    /// Queue a mail with the given subject and body.
    ///
    /// Does nothing but log when email is disabled. Never fails: delivery
    /// problems are logged by the worker.
    pub fn send_email(&self, subject: &str, body: String) {
        if !self.config.active {
            info!("Email notification is disabled");
            return;
        }

        let message = MailMessage {
            to: self.config.to.clone(),
            from: self.config.from.clone(),
            subject: subject.to_string(),
            body,
        };

        if self.sender.send(message).is_err() {
            warn!("Mail worker channel closed");
        }
    }

    /// Report a newly opened long/short pair.
    pub fn notify_entry(&self, spread: &Spread, trade: &EntryTrade) {
        self.send_email(SUBJECT_NEW_ENTRY, entry_report(spread, trade));
    }

    /// Report a closed long/short pair with its profit.
    pub fn notify_exit(&self, spread: &Spread, trade: &ExitTrade) {
        self.send_email(SUBJECT_NEW_EXIT, exit_report(spread, trade));
    }
}

/// Background worker that delivers queued mail.
async fn mail_worker(mailer: Arc<dyn Mailer>, mut receiver: mpsc::UnboundedReceiver<MailMessage>) {
    debug!("Mail worker started");

    while let Some(message) = receiver.recv().await {
        if let Err(e) = mailer.send(&message).await {
            error!(
                to = %message.to,
                subject = %message.subject,
                error = %e,
                "Could not send email notification"
            );
        }
    }

    debug!("Mail worker shutting down");
}
