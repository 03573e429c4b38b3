//! Tactics Lobby: presentation core for a multiplayer tactics client.
//!
//! Owns the screen state machine (login, main menu, party setup, lobby,
//! game, loading), the party-composition builder and the lobby roster.
//! Network transport, persistence and world rendering live elsewhere; this
//! crate consumes parsed [`SessionState`] snapshots and reports user intent
//! through [`SessionCallbacks`].
//!
//! # Architecture
//!
//! - **Element**: display node tree and declarative factory
//! - **Region**: display regions keyed by [`ScreenId`], injectable for tests
//! - **Screens**: one [`ScreenHandler`] per screen
//! - **Party**: bounded companion composition with drag and drop
//! - **Manager**: [`ScreenManager`] drives transitions and the connection indicator
//! - **TUI**: terminal front end built on ratatui
//!
//! # Example
//!
//! ```
//! use tactics_lobby::{
//!     ClientConfig, GameConfig, MemoryRegions, ScreenId, ScreenManager, SessionCallbacks,
//!     SessionState,
//! };
//!
//! struct Quiet;
//!
//! impl SessionCallbacks for Quiet {
//!     fn on_login(&mut self) {}
//!     fn on_login_with_name(&mut self, _name: &str) {}
//!     fn on_logout(&mut self) {}
//!     fn on_create_game(&mut self, _character_id: &str, _config: &GameConfig) {}
//!     fn on_join_game(&mut self, _code: &str, _character_id: &str) {}
//!     fn on_leave_game(&mut self) {}
//!     fn on_set_ready(&mut self, _ready: bool) {}
//!     fn on_start_game(&mut self) {}
//!     fn on_navigate_to_party_setup(&mut self) {}
//!     fn on_back_to_main_menu(&mut self) {}
//!     fn is_auth_enabled(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let config = ClientConfig::default();
//! let mut manager = ScreenManager::new(
//!     MemoryRegions::standard(),
//!     Box::new(Quiet),
//!     config.default_party().clone(),
//! );
//! manager.update(&SessionState::on(ScreenId::MainMenu));
//! assert_eq!(manager.active(), ScreenId::MainMenu);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod callbacks;
mod config;
mod element;
mod error;
mod manager;
mod party;
mod region;
mod screens;
mod session;
mod tui;

// Crate-level exports - Errors and configuration
pub use config::ClientConfig;
pub use error::ConfigError;

// Crate-level exports - Session snapshot
pub use session::{
    CharacterSummary, ConnectionStatus, LocalUser, RosterEntry, ScreenId, SessionState,
};

// Crate-level exports - Visual element factory
pub use element::{Element, ElementKind, ElementSpec, create_element, mount};

// Crate-level exports - Regions and callbacks
pub use callbacks::SessionCallbacks;
pub use region::{INDICATOR_ID, MemoryRegions, ScreenRegions};

// Crate-level exports - Party builder
pub use party::{
    CLASS_SOURCES_ID, CharacterClass, DEFAULT_DIFFICULTY, DEFAULT_MONSTER_COUNT,
    DEFAULT_MOVE_RANGE, DRAG_OVER_CLASS, DragState, GameConfig, MAX_PLAYERS, MAX_SLOTS,
    MONSTER_COUNT_ID, MOVE_RANGE_ID, PartyBuilder, PartyComposition, PartySlot, SLOT_COUNT_ID,
    SLOT_LIST_ID, class_source_id, slot_id, slot_name_id, slot_remove_id,
};

// Crate-level exports - Screens
pub use screens::{
    AUTH_LOGIN_ID, CHARACTER_SUMMARY_ID, CHOOSE_CHARACTER_ID, CREATE_GAME_ID,
    CREATE_PARTY_GAME_ID, Effect, GAME_VIEW_ID, GameScreen, JOIN_CODE_ID, JOIN_CODE_LEN,
    JOIN_GAME_ID, LEAVE_GAME_ID, LEGACY_REGIONS, LOADING_STATUS_ID, LOBBY_CODE_ID,
    LOGIN_STATUS_ID, LOGOUT_ID, LoadingScreen, LobbyScreen, LoginScreen, MENU_STATUS_ID,
    MIN_NAME_LEN, MainMenuScreen, NAME_ENTRY_ID, NAME_INPUT_ID, NAME_LOGIN_ID, PARTY_BACK_ID,
    PARTY_STATUS_ID, PartySetupScreen, READINESS_ID, READY_TOGGLE_ID, ROSTER_ID, START_GAME_ID,
    ScreenContext, ScreenHandler, Screens, SelectedCharacter, USER_NAME_ID, UiEvent, can_start,
    layout, normalize_join_code, readiness_summary, status_text, validate_name,
};

// Crate-level exports - Orchestration
pub use manager::{JOURNAL_CAPACITY, Lifecycle, ScreenManager};

// Crate-level exports - Terminal front end
pub use tui::{
    KeyAction, LocalSession, SharedState, TerminalApp, draw_region, element_lines,
    focusable_ids, run_interactive, run_preview,
};
