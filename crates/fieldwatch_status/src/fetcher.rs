//! HTTP status fetcher.

use crate::{FetchOutcome, StatusSource, parse_status};
use async_trait::async_trait;
use fieldwatch_error::{FetchError, FetchErrorKind};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Longest wait for the stats document.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the stats XML over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStatusFetcher {
    client: reqwest::Client,
    source_url: String,
    timeout: Duration,
}

impl HttpStatusFetcher {
    /// Creates a fetcher with the default 10 second timeout.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self::with_timeout(source_url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Creates a fetcher with a custom timeout.
    pub fn with_timeout(source_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            source_url: source_url.into(),
            timeout,
        }
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn fetch_document(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.source_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(FetchErrorKind::HttpStatus(status.as_u16())));
        }

        response.text().await.map_err(|e| self.classify(e))
    }

    #[track_caller]
    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::new(FetchErrorKind::Timeout(self.timeout.as_secs()))
        } else {
            FetchError::new(FetchErrorKind::Transport(err.to_string()))
        }
    }
}

#[async_trait]
impl StatusSource for HttpStatusFetcher {
    #[instrument(skip(self), fields(url = %self.source_url))]
    async fn fetch(&self) -> FetchOutcome {
        debug!("Fetching server stats");

        let result = match self.fetch_document().await {
            Ok(body) => parse_status(&body),
            Err(e) => Err(e),
        };

        match &result {
            Ok(status) => info!(
                server = %status.server_name(),
                players = *status.players(),
                max_players = *status.max_players(),
                mods = status.mods().len(),
                "Fetched server status"
            ),
            Err(e) => warn!(error = %e.kind, "Status source unavailable"),
        }

        FetchOutcome::from(result)
    }

    fn describe(&self) -> &str {
        &self.source_url
    }
}
