//! Synchronization state.

use fieldwatch_core::ServerStatus;
use std::time::{Duration, Instant};

/// What the engine remembers between ticks.
///
/// Starts empty and lives as long as the engine; nothing is persisted, so a
/// restart always publishes on its first tick.
#[derive(Debug, Clone, Default)]
pub struct SyncState {
    last_known_good: Option<ServerStatus>,
    last_published_online: bool,
    last_published_players: u32,
    last_publish_time: Option<Instant>,
}

impl SyncState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent online snapshot observed.
    pub fn last_known_good(&self) -> Option<&ServerStatus> {
        self.last_known_good.as_ref()
    }

    /// Online flag of the last published report.
    pub fn last_published_online(&self) -> bool {
        self.last_published_online
    }

    /// Player count of the last published report.
    pub fn last_published_players(&self) -> u32 {
        self.last_published_players
    }

    /// When the last publish succeeded.
    pub fn last_publish_time(&self) -> Option<Instant> {
        self.last_publish_time
    }

    /// Remembers `snapshot` as last known good if it is online.
    pub fn observe(&mut self, snapshot: &ServerStatus) {
        if *snapshot.is_online() {
            self.last_known_good = Some(snapshot.clone());
        }
    }

    /// Whether `snapshot` differs from the last published report.
    pub fn is_changed(&self, snapshot: &ServerStatus) -> bool {
        let online = *snapshot.is_online();
        online != self.last_published_online
            || (online && *snapshot.players() != self.last_published_players)
    }

    /// Time since the last publish, `None` if nothing was published yet.
    pub fn elapsed_since_publish(&self, now: Instant) -> Option<Duration> {
        self.last_publish_time
            .map(|published| now.saturating_duration_since(published))
    }

    /// The snapshot to show for `snapshot`.
    ///
    /// An offline result shows the last known configuration marked offline,
    /// if there is one.
    pub fn display_snapshot(&self, snapshot: &ServerStatus) -> ServerStatus {
        if *snapshot.is_online() {
            return snapshot.clone();
        }
        match &self.last_known_good {
            Some(good) => good.as_offline(),
            None => snapshot.clone(),
        }
    }

    /// Records a successful publish of `displayed`.
    pub fn record_publish(&mut self, displayed: &ServerStatus, now: Instant) {
        self.last_published_online = *displayed.is_online();
        self.last_published_players = *displayed.players();
        self.last_publish_time = Some(now);
    }
}
