//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets such as the mail relay
//! token come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use spreadbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::balance::BalanceConfig;
use super::exchange::ExchangeConfig;
use super::logging::LoggingConfig;
use super::notification::NotificationConfig;
use crate::domain::ExchangeId;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Balance polling settings.
    #[serde(default)]
    pub balance: BalanceConfig,

    /// Configured exchange connections.
    #[serde(default)]
    pub exchanges: Vec<ExchangeConfig>,

    /// Trade report delivery.
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Identities of every configured exchange, in file order.
    #[must_use]
    pub fn exchange_ids(&self) -> Vec<ExchangeId> {
        self.exchanges.iter().map(ExchangeConfig::id).collect()
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.exchanges.is_empty() {
            return Err(ConfigError::MissingField { field: "exchanges" }.into());
        }

        let mut seen = HashSet::new();
        for exchange in &self.exchanges {
            let name = exchange.name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "exchanges.name",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(name) {
                return Err(ConfigError::InvalidValue {
                    field: "exchanges.name",
                    reason: format!("duplicate exchange '{name}'"),
                }
                .into());
            }
        }

        if self.balance.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.balance.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let email = &self.notification.email;
        if email.active {
            if email.to.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "email.to" }.into());
            }
            if email.from.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "email.from" }.into());
            }
        }

        if let Some(relay_url) = &self.notification.relay_url {
            Url::parse(relay_url).map_err(|e| ConfigError::InvalidValue {
                field: "relay_url",
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }
}
