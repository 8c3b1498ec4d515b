//! Fieldwatch binary.
//!
//! Loads configuration, then either validates it (`check`) or runs the
//! Discord bot (`run`, the default).

use clap::Parser;
use fieldwatch::FieldwatchConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_config, run_bot};

    // .env must be loaded before clap reads DISCORD_TOKEN
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!(config_file = ?cli.config, "Loading configuration");
    let config = FieldwatchConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Commands::Run {
        discord_token: std::env::var("DISCORD_TOKEN").ok(),
    }) {
        Commands::Run { discord_token } => run_bot(&config, discord_token).await?,
        Commands::Check => check_config(&config),
    }

    Ok(())
}
