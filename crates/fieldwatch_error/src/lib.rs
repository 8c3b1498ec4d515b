//! Error types for Fieldwatch.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific failure
//! - `*Error` struct wraps the kind together with the source location
//! - constructors use `#[track_caller]`, so the location is captured for free
//!
//! # Examples
//!
//! ```
//! use fieldwatch_error::{ConfigError, FieldwatchResult};
//!
//! fn load_channel() -> FieldwatchResult<u64> {
//!     Err(ConfigError::new("channel_id is not a snowflake"))?
//! }
//!
//! let err = load_channel().unwrap_err();
//! assert!(err.to_string().contains("snowflake"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod config;
mod error;
mod fetch;

pub use channel::{ChannelError, ChannelErrorKind};
pub use config::ConfigError;
pub use error::{FieldwatchError, FieldwatchErrorKind, FieldwatchResult};
pub use fetch::{FetchError, FetchErrorKind};
