//! Session snapshot types consumed from the network layer.
//!
//! Snapshots arrive already parsed and are never mutated by the
//! presentation core.

use std::path::Path;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::ConfigError;

/// Top-level screens. Exactly one is active at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScreenId {
    /// Authentication / name entry.
    #[default]
    Login,
    /// Hub after login.
    MainMenu,
    /// Party composition before creating a game.
    PartySetup,
    /// Pre-game roster.
    Lobby,
    /// Active game world.
    Game,
    /// Transient wait screen.
    Loading,
}

impl ScreenId {
    /// Id of the display region for this screen.
    #[instrument]
    pub fn region_id(self) -> &'static str {
        match self {
            Self::Login => "login-screen",
            Self::MainMenu => "main-menu-screen",
            Self::PartySetup => "party-setup-screen",
            Self::Lobby => "lobby-screen",
            Self::Game => "game-screen",
            Self::Loading => "loading-screen",
        }
    }
}

/// Transport connection status as reported by the network layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConnectionStatus {
    /// No transport.
    #[default]
    Disconnected,
    /// Opening the transport.
    Connecting,
    /// Transport open, credentials in flight.
    Authenticating,
    /// Fully connected.
    Connected,
    /// Lost connection, retrying.
    Reconnecting,
}

impl ConnectionStatus {
    /// Label and style class for the connection indicator.
    #[instrument]
    pub fn indicator(self) -> (&'static str, &'static str) {
        match self {
            Self::Disconnected => ("Disconnected", "status-disconnected"),
            Self::Connecting => ("Connecting...", "status-connecting"),
            Self::Authenticating => ("Authenticating...", "status-connecting"),
            Self::Connected => ("Connected", "status-connected"),
            Self::Reconnecting => ("Reconnecting...", "status-reconnecting"),
        }
    }

    /// True while a connection attempt is in flight.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            Self::Connecting | Self::Authenticating | Self::Reconnecting
        )
    }

    /// True once fully connected.
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

/// The logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct LocalUser {
    id: String,
    display_name: String,
}

/// One participant in the lobby roster.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct RosterEntry {
    name: String,
    #[serde(default)]
    character_name: Option<String>,
    #[serde(default)]
    connected: bool,
    #[serde(default)]
    ready: bool,
    #[serde(default)]
    is_dm: bool,
}

impl RosterEntry {
    /// True when this entry counts toward readiness.
    pub fn ready_or_dm(&self) -> bool {
        self.ready || self.is_dm
    }
}

/// A character returned by the external character-selection service.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct CharacterSummary {
    id: String,
    name: String,
    class: String,
    level: u32,
}

/// Authoritative session snapshot.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    screen: ScreenId,
    #[serde(default)]
    connection_status: ConnectionStatus,
    #[serde(default)]
    user: Option<LocalUser>,
    #[serde(default)]
    join_code: Option<String>,
    #[serde(default)]
    players: Vec<RosterEntry>,
    #[serde(default)]
    is_dm: bool,
}

impl SessionState {
    /// Creates a snapshot for the given screen with everything else defaulted.
    #[instrument]
    pub fn on(screen: ScreenId) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    /// Returns a copy with a different screen.
    pub fn with_screen(mut self, screen: ScreenId) -> Self {
        self.screen = screen;
        self
    }

    /// Returns a copy with a different connection status.
    pub fn with_connection(mut self, status: ConnectionStatus) -> Self {
        self.connection_status = status;
        self
    }

    /// Returns a copy with the given user.
    pub fn with_user(mut self, user: LocalUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Returns a copy with the given join code.
    pub fn with_join_code(mut self, code: impl Into<String>) -> Self {
        self.join_code = Some(code.into());
        self
    }

    /// Returns a copy with the given roster.
    pub fn with_players(mut self, players: Vec<RosterEntry>) -> Self {
        self.players = players;
        self
    }

    /// Returns a copy with the DM flag set.
    pub fn with_dm(mut self, is_dm: bool) -> Self {
        self.is_dm = is_dm;
        self
    }

    /// Loads a snapshot from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let state: Self = serde_json::from_str(&content)?;
        debug!(screen = %state.screen, "Snapshot loaded");
        Ok(state)
    }
}
