//! Fieldwatch: a Discord bot that mirrors a Farming Simulator dedicated
//! server's status into a single, continuously edited channel report.
//!
//! The pieces live in their own crates:
//! - `fieldwatch_status` fetches and normalizes the server's XML stats
//! - `fieldwatch_sync` decides when to publish and upserts the report
//! - `fieldwatch_discord` connects both to Discord
//!
//! This crate holds configuration and the `fieldwatch` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{DEFAULT_CONFIG_PATH, ENV_PREFIX, FieldwatchConfig, MAX_INTERVAL_SECS};
