//! Handlers for `check` subcommands.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::mailer::build_mailer;
use crate::port::MailMessage;

/// Validate configuration file without starting the bot.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    let config = Config::load(path)?;

    println!("✓ Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Exchanges:");
    for exchange in &config.exchanges {
        println!("    - {} (paper balance {})", exchange.name, exchange.paper_balance);
    }
    println!("  Poll interval: {}s", config.balance.poll_interval_secs);
    println!("  Fetch timeout: {}s", config.balance.fetch_timeout_secs);

    let email = &config.notification.email;
    if email.active {
        println!("✓ Email notifications enabled ({} -> {})", email.from, email.to);
    } else {
        println!("  Email notifications: disabled");
    }
    match &config.notification.relay_url {
        Some(url) => println!("  Mail relay: {url}"),
        None => println!("  Mail relay: none (mail is logged)"),
    }

    println!();
    println!("Configuration is ready to use.");
    Ok(())
}

/// Send a test message through the configured mailer and wait for the result.
///
/// Logging is initialised first so the logging mailer's output is visible
/// when no relay is configured.
pub async fn execute_mail<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();
    let email = &config.notification.email;
    if email.to.trim().is_empty() {
        return Err(ConfigError::MissingField { field: "email.to" }.into());
    }
    let mailer = build_mailer(&config.notification)?;

    let message = MailMessage {
        to: email.to.clone(),
        from: email.from.clone(),
        subject: "Test Message".to_string(),
        body: "spreadbot mail delivery check\n".to_string(),
    };

    println!("Sending test message to {}", message.to);
    mailer.send(&message).await?;
    println!("✓ Mail delivered");
    Ok(())
}
