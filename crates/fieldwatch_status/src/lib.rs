//! Status Fetcher/Normalizer.
//!
//! Retrieves the dedicated server's XML stats document and maps it into a
//! canonical [`ServerStatus`](fieldwatch_core::ServerStatus). The feed is not
//! consistent about its schema, so every field is resolved through an ordered
//! table of extraction strategies (see [`FieldRule`]).
//!
//! Fetching never fails outward. Transport, timeout and parse failures all
//! become [`FetchOutcome::Offline`], which still carries the typed reason so
//! callers can log it.
//!
//! # Example
//!
//! ```no_run
//! use fieldwatch_status::{HttpStatusFetcher, StatusSource};
//!
//! # async fn example() {
//! let fetcher = HttpStatusFetcher::new("http://127.0.0.1:8080/feed/dedicated-server-stats.xml");
//! let outcome = fetcher.fetch().await;
//! println!("online: {}", outcome.is_online());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fetcher;
mod parse;
mod resolve;
mod source;

pub use fetcher::{DEFAULT_FETCH_TIMEOUT, HttpStatusFetcher};
pub use parse::{DEFAULT_MAX_PLAYERS, DEFAULT_SERVER_NAME, parse_status};
pub use resolve::{Extract, FieldRule};
pub use source::{FetchOutcome, StatusSource};
