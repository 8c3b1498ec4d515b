//! On-demand status queries.

use crate::render_report;
use fieldwatch_core::{ServerStatus, StatusReport};
use fieldwatch_status::StatusSource;
use std::sync::Arc;
use tracing::{info, instrument};

/// Answers manual status requests.
///
/// Shares only the status source with the engine, so a query can never
/// delay or suppress the next scheduled publish.
#[derive(Clone)]
pub struct StatusQuery {
    source: Arc<dyn StatusSource>,
}

impl StatusQuery {
    /// Creates a query handler over `source`.
    pub fn new(source: Arc<dyn StatusSource>) -> Self {
        Self { source }
    }

    /// Fetches a fresh snapshot.
    pub async fn snapshot(&self) -> ServerStatus {
        self.source.fetch().await.into_snapshot()
    }

    /// Fetches a fresh snapshot and renders it without a footer.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn report(&self) -> StatusReport {
        let snapshot = self.snapshot().await;
        info!(
            online = *snapshot.is_online(),
            players = *snapshot.players(),
            "Answering status query"
        );
        render_report(&snapshot, None)
    }
}
