//! CLI command definitions.

use clap::{Parser, Subcommand};
use fieldwatch::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// Fieldwatch - live Farming Simulator server status in Discord
#[derive(Parser, Debug)]
#[command(name = "fieldwatch")]
#[command(about = "Live Farming Simulator server status in Discord", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and keep the status report up to date
    Run {
        /// Discord bot token
        #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
        discord_token: Option<String>,
    },

    /// Validate the configuration and exit
    Check,
}
