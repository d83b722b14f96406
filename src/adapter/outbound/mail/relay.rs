//! HTTP mail relay client.
//!
//! Provides an implementation of the [`Mailer`] trait that hands messages to
//! an HTTP relay as JSON (`{to, from, subject, text}`), the request shape most
//! transactional mail APIs accept.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ConfigError, Error, Result};
use crate::port::{MailMessage, Mailer};

/// Environment variable holding the relay's bearer token.
pub const RELAY_TOKEN_ENV: &str = "MAIL_RELAY_TOKEN";

/// Mail relay client.
#[derive(Debug)]
pub struct RelayMailer {
    /// HTTP client for relay requests.
    client: Client,
    /// Endpoint accepting message POSTs.
    url: Url,
    /// Optional bearer token.
    token: Option<String>,
}

impl RelayMailer {
    /// Create a relay client for `url`.
    #[must_use]
    pub fn new(url: Url, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            token,
        }
    }

    /// Create a relay client, reading the token from `MAIL_RELAY_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` does not parse.
    pub fn from_env(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| ConfigError::InvalidValue {
            field: "relay_url",
            reason: e.to_string(),
        })?;
        Ok(Self::new(url, std::env::var(RELAY_TOKEN_ENV).ok()))
    }

    /// The endpoint messages are posted to.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let mut request = self.client.post(self.url.clone()).json(message);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Mail(format!("relay returned {status}: {body}")));
        }

        Ok(())
    }
}
