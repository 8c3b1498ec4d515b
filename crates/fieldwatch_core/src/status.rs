//! Server status snapshots.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Placeholder name used when nothing is known about the server.
pub const OFFLINE_SERVER_NAME: &str = "Server Offline";

/// Point-in-time view of the remote game server.
///
/// An offline snapshot always has zero player counts. Its mod list means
/// "unknown", not "no mods": see [`ServerStatus::known_mods`].
///
/// # Examples
///
/// ```
/// use fieldwatch_core::ServerStatus;
///
/// let status = ServerStatus::builder()
///     .is_online(true)
///     .server_name("Green Acres")
///     .players(3)
///     .max_players(16)
///     .build()
///     .unwrap();
///
/// assert!(*status.is_online());
/// assert_eq!(*status.players(), 3);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
pub struct ServerStatus {
    /// Whether the last fetch produced a structurally valid document.
    #[builder(default)]
    is_online: bool,

    /// Display name of the server.
    #[builder(default = "OFFLINE_SERVER_NAME.to_string()", setter(into))]
    server_name: String,

    /// Active map, if the source reports one.
    #[builder(default)]
    #[serde(default)]
    map_name: Option<String>,

    /// Connected players.
    #[builder(default)]
    players: u32,

    /// Player slots.
    #[builder(default)]
    max_players: u32,

    /// Display names of active mods, in source order.
    #[builder(default)]
    #[serde(default)]
    mods: Vec<String>,
}

impl ServerStatus {
    /// Creates a new snapshot builder.
    pub fn builder() -> ServerStatusBuilder {
        ServerStatusBuilder::default()
    }

    /// Snapshot of a server that answered with a valid document.
    pub fn online(
        server_name: impl Into<String>,
        map_name: Option<String>,
        players: u32,
        max_players: u32,
        mods: Vec<String>,
    ) -> Self {
        Self {
            is_online: true,
            server_name: server_name.into(),
            map_name,
            players,
            max_players,
            mods,
        }
    }

    /// Canonical snapshot for an unreachable or unreadable source.
    pub fn offline() -> Self {
        Self {
            is_online: false,
            server_name: OFFLINE_SERVER_NAME.to_string(),
            map_name: None,
            players: 0,
            max_players: 0,
            mods: Vec::new(),
        }
    }

    /// Keeps the descriptive fields of this snapshot but marks it offline.
    ///
    /// Used to show the last known configuration while the source is down.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwatch_core::ServerStatus;
    ///
    /// let live = ServerStatus::online("Farm", Some("Elmcreek".into()), 4, 16, vec!["Seasons".into()]);
    /// let stale = live.as_offline();
    ///
    /// assert!(!*stale.is_online());
    /// assert_eq!(*stale.players(), 0);
    /// assert_eq!(stale.map_name().as_deref(), Some("Elmcreek"));
    /// assert_eq!(stale.mods().len(), 1);
    /// ```
    pub fn as_offline(&self) -> Self {
        Self {
            is_online: false,
            players: 0,
            max_players: 0,
            ..self.clone()
        }
    }

    /// The mod list, or `None` when it is unknown.
    ///
    /// An offline snapshot with an empty list knows nothing about mods; an
    /// online one really has none.
    pub fn known_mods(&self) -> Option<&[String]> {
        if !self.is_online && self.mods.is_empty() {
            None
        } else {
            Some(&self.mods)
        }
    }
}

impl Default for ServerStatus {
    fn default() -> Self {
        Self::offline()
    }
}
