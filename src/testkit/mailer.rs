//! [`Mailer`] doubles for notification assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::error::Error;
use crate::port::{MailMessage, Mailer};

#[derive(Default)]
struct Inbox {
    messages: Mutex<Vec<MailMessage>>,
    delivered: Notify,
}

/// Thread-safe mail collector.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    inbox: Arc<Inbox>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inbox.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All messages delivered so far.
    pub fn messages(&self) -> Vec<MailMessage> {
        self.inbox.messages.lock().clone()
    }

    /// Wait until at least `count` messages have arrived and return them.
    ///
    /// Panics after five seconds.
    pub async fn wait_for(&self, count: usize) -> Vec<MailMessage> {
        let wait = async {
            loop {
                {
                    let messages = self.inbox.messages.lock();
                    if messages.len() >= count {
                        return messages.clone();
                    }
                }
                self.inbox.delivered.notified().await;
            }
        };

        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("mail delivered in time")
    }

    /// Wait for the first message.
    pub async fn wait_for_message(&self) -> MailMessage {
        self.wait_for(1).await.remove(0)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), Error> {
        self.inbox.messages.lock().push(message.clone());
        self.inbox.delivered.notify_one();
        Ok(())
    }
}

/// Mailer whose every delivery fails, counting the attempts.
#[derive(Clone, Default)]
pub struct FailingMailer {
    attempts: Arc<AtomicUsize>,
}

impl FailingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deliveries attempted so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), Error> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(Error::Mail(format!("relay refused mail to {}", message.to)))
    }
}
