//! The status source seam and its typed outcome.

use async_trait::async_trait;
use fieldwatch_core::ServerStatus;
use fieldwatch_error::FetchError;

/// Result of one fetch-and-parse cycle.
///
/// Both variants produce a snapshot; `Offline` additionally says why.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The source answered with a usable document.
    Online(ServerStatus),
    /// The source was unreachable or its answer unusable.
    Offline(FetchError),
}

impl FetchOutcome {
    /// Whether the source produced a usable document.
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }

    /// The failure reason, for offline outcomes.
    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            Self::Online(_) => None,
            Self::Offline(err) => Some(err),
        }
    }

    /// The snapshot this outcome stands for.
    ///
    /// Offline outcomes always map to [`ServerStatus::offline`].
    pub fn snapshot(&self) -> ServerStatus {
        match self {
            Self::Online(status) => status.clone(),
            Self::Offline(_) => ServerStatus::offline(),
        }
    }

    /// Consumes the outcome, yielding its snapshot.
    pub fn into_snapshot(self) -> ServerStatus {
        match self {
            Self::Online(status) => status,
            Self::Offline(_) => ServerStatus::offline(),
        }
    }
}

impl From<Result<ServerStatus, FetchError>> for FetchOutcome {
    fn from(result: Result<ServerStatus, FetchError>) -> Self {
        match result {
            Ok(status) => Self::Online(status),
            Err(err) => Self::Offline(err),
        }
    }
}

/// Anything that can report the monitored server's status.
///
/// Implementations must not fail: every error degrades to
/// [`FetchOutcome::Offline`].
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches and normalizes a fresh snapshot.
    async fn fetch(&self) -> FetchOutcome;

    /// Where the status comes from, for logs.
    fn describe(&self) -> &str;
}
