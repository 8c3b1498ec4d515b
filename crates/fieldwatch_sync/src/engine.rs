//! Synchronization decision engine.

use crate::{PublishAction, ReportChannel, SyncMetrics, SyncState, UpsertPublisher};
use fieldwatch_status::StatusSource;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, instrument, warn};

/// A report older than this many cooldowns is republished even if nothing changed.
pub const FORCED_REFRESH_FACTOR: u32 = 5;

/// Timing of the sync loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    /// How often the source is polled
    pub poll_interval: Duration,
    /// Minimum time between two publishes
    pub cooldown: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            cooldown: Duration::from_secs(60),
        }
    }
}

impl SyncSettings {
    /// Age after which a publish is forced regardless of changes.
    pub fn forced_refresh_after(&self) -> Duration {
        self.cooldown.saturating_mul(FORCED_REFRESH_FACTOR)
    }
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A report was published.
    Published {
        /// Edit or create
        action: PublishAction,
        /// Whether only the refresh floor triggered it
        forced: bool,
    },
    /// Nothing changed and the report is recent enough.
    Unchanged,
    /// Something changed but the cooldown has not elapsed yet.
    CoolingDown,
    /// Publishing was attempted and failed; it is retried on a later tick.
    PublishFailed,
}

/// Polls the source and publishes changes worth publishing.
///
/// Owns its [`SyncState`]; nothing else writes it.
pub struct SyncEngine<C> {
    source: Arc<dyn StatusSource>,
    publisher: UpsertPublisher<C>,
    settings: SyncSettings,
    state: SyncState,
    metrics: SyncMetrics,
}

impl<C: ReportChannel> SyncEngine<C> {
    /// Creates an engine with empty state.
    pub fn new(source: Arc<dyn StatusSource>, channel: C, settings: SyncSettings) -> Self {
        let footer = format!(
            "🔄 Automatic update - cooldown {}s",
            settings.cooldown.as_secs()
        );
        Self {
            source,
            publisher: UpsertPublisher::new(channel, footer),
            settings,
            state: SyncState::new(),
            metrics: SyncMetrics::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Shared handle to the engine's counters.
    pub fn metrics(&self) -> SyncMetrics {
        self.metrics.clone()
    }

    /// Runs one tick now.
    pub async fn tick(&mut self) -> TickOutcome {
        self.tick_at(Instant::now()).await
    }

    /// Runs one tick as if the current time were `now`.
    #[instrument(skip(self, now))]
    pub async fn tick_at(&mut self, now: Instant) -> TickOutcome {
        self.metrics.record_tick();

        let outcome = self.source.fetch().await;
        if let Some(err) = outcome.failure() {
            self.metrics.record_fetch_failure();
            debug!(
                error = %err,
                transport = err.kind.is_transport(),
                "Tick observed offline source"
            );
        }
        let snapshot = outcome.into_snapshot();
        self.state.observe(&snapshot);

        let elapsed = self.state.elapsed_since_publish(now);
        let changed = self.state.is_changed(&snapshot);
        let forced = elapsed.is_none_or(|e| e > self.settings.forced_refresh_after());
        let cooled = elapsed.is_none_or(|e| e > self.settings.cooldown);

        if !changed && !forced {
            debug!("No change, report still fresh");
            return TickOutcome::Unchanged;
        }
        if !cooled {
            debug!(?elapsed, "Change pending until cooldown elapses");
            return TickOutcome::CoolingDown;
        }

        let display_snapshot = self.state.display_snapshot(&snapshot);
        match self.publisher.publish(&display_snapshot, true).await {
            Ok(action) => {
                self.state.record_publish(&display_snapshot, now);
                self.metrics.record_publish(now);
                info!(
                    online = *display_snapshot.is_online(),
                    players = *display_snapshot.players(),
                    %action,
                    forced = forced && !changed,
                    "Status updated"
                );
                TickOutcome::Published {
                    action,
                    forced: forced && !changed,
                }
            }
            Err(e) => {
                self.metrics.record_publish_failure();
                error!(error = %e, "Failed to publish status");
                TickOutcome::PublishFailed
            }
        }
    }

    /// Ticks every poll interval until the task is dropped.
    ///
    /// Ticks run one after another; a tick that overruns the interval makes
    /// the loop skip the missed ticks instead of bunching them up.
    #[instrument(skip(self), fields(source = %self.source.describe(), poll = ?self.settings.poll_interval, cooldown = ?self.settings.cooldown))]
    pub async fn run(mut self) {
        info!("Status sync loop started");

        let mut ticker = interval(self.settings.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.tick().await == TickOutcome::PublishFailed {
                warn!(
                    metrics = ?self.metrics.snapshot(),
                    "Publish will be retried on a later tick"
                );
            }
        }
    }
}
