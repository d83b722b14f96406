//! Handler for the `run` command.

use std::sync::Arc;

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::balance::{
    build_balance_service, build_paper_source, build_poller,
};

/// Execute the run command.
///
/// Loads configuration, starts the balance poller over the configured paper
/// exchanges and blocks until Ctrl-C.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(secs) = args.poll_interval {
        if secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        config.balance.poll_interval_secs = secs;
    }

    config.init_logging();
    info!(
        exchanges = config.exchanges.len(),
        poll_interval_secs = config.balance.poll_interval_secs,
        "spreadbot starting"
    );

    let source = Arc::new(build_paper_source(&config));
    let service = build_balance_service(&config, source);
    let handle = build_poller(&config, service)?.start();

    signal::ctrl_c().await?;
    info!("Shutdown signal received");
    handle.shutdown().await;

    info!("spreadbot stopped");
    Ok(())
}
