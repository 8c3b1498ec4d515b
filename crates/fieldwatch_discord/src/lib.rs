//! Discord integration for Fieldwatch.
//!
//! - **channel**: [`DiscordChannel`], the report channel the sync engine publishes to
//! - **embed**: report to embed conversion
//! - **handler**: [`StatusHandler`], starts the sync loop and answers `/status`
//! - **client**: [`StatusBot`], serenity client lifecycle
//! - **error**: Discord-specific error types

#![warn(missing_docs)]

mod channel;
mod client;
mod embed;
mod error;
mod handler;

pub use channel::DiscordChannel;
pub use client::StatusBot;
pub use embed::report_embed;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::{QUERY_FAILED_REPLY, STATUS_COMMAND, StatusHandler};
