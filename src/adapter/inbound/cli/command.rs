//! Command-line interface definitions.
//!
//! Defines the CLI structure for the spreadbot application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Balance caching and trade notifications for cross-exchange arbitrage
#[derive(Parser, Debug)]
#[command(name = "spreadbot")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the spreadbot CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll exchange balances into the cache until interrupted
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `spreadbot check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config(ConfigPathArg),
    /// Send a test message through the configured mailer
    Mail(ConfigPathArg),
}

/// Arguments for `spreadbot run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the poll interval in seconds
    #[arg(long)]
    pub poll_interval: Option<u64>,
}

/// Configuration file path argument.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
