//! Status synchronization for Fieldwatch.
//!
//! This crate decides *whether* and *when* a status change is worth
//! publishing, and keeps exactly one live report per channel.
//!
//! # Architecture
//!
//! - [`SyncEngine`] owns the [`SyncState`] and runs the tick loop: fetch,
//!   compare against what was last published, apply cooldown and forced
//!   refresh rules, then publish.
//! - [`UpsertPublisher`] edits the engine's previous report in place, or
//!   sends a new one if there is none.
//! - [`StatusQuery`] answers on-demand requests with a fresh snapshot and
//!   never touches the engine's state.
//! - [`ReportChannel`] is the seam to the chat platform.
//!
//! # Example
//!
//! ```rust,ignore
//! use fieldwatch_status::HttpStatusFetcher;
//! use fieldwatch_sync::{SyncEngine, SyncSettings};
//! use std::sync::Arc;
//!
//! let source = Arc::new(HttpStatusFetcher::new(url));
//! let engine = SyncEngine::new(source, channel, SyncSettings::default());
//! tokio::spawn(engine.run());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod engine;
mod metrics;
mod publisher;
mod query;
mod render;
mod state;

pub use channel::{AuthorId, ChannelMessage, ChannelResult, MessageId, ReportChannel};
pub use engine::{FORCED_REFRESH_FACTOR, SyncEngine, SyncSettings, TickOutcome};
pub use metrics::{SyncMetrics, SyncMetricsSnapshot};
pub use publisher::{PublishAction, RECENT_MESSAGE_WINDOW, UpsertPublisher};
pub use query::StatusQuery;
pub use render::{
    ELLIPSIS, FIELD_VALUE_LIMIT, MOD_DISPLAY_LIMIT, REPORT_TITLE, render_report, summarize_mods,
    truncate_field,
};
pub use state::SyncState;
