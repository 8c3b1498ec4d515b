//! Core data types for Fieldwatch.
//!
//! - [`ServerStatus`] is the immutable point-in-time view of the game server.
//! - [`StatusReport`] is the rendered, platform-neutral report that chat
//!   integrations turn into their native rich message format.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod report;
mod status;

pub use report::{ReportColour, ReportField, StatusReport};
pub use status::{OFFLINE_SERVER_NAME, ServerStatus, ServerStatusBuilder};
