//! Command-line interface.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{check_config, run_bot};
