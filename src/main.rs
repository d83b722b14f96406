use clap::Parser;

use spreadbot::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use spreadbot::adapter::inbound::cli::{check, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run::execute(&args).await?,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config)?,
        Commands::Check(CheckCommand::Mail(args)) => check::execute_mail(&args.config).await?,
    }

    Ok(())
}
