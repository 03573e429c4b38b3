//! Per-screen handlers.

mod game;
mod handler;
mod loading;
mod lobby;
mod login;
mod main_menu;
mod party_setup;

pub use game::{GAME_VIEW_ID, GameScreen, LEGACY_REGIONS};
pub use handler::{Effect, ScreenContext, ScreenHandler, UiEvent};
pub use loading::{LOADING_STATUS_ID, LoadingScreen, status_text};
pub use lobby::{
    LEAVE_GAME_ID, LOBBY_CODE_ID, LobbyScreen, READINESS_ID, READY_TOGGLE_ID, ROSTER_ID,
    START_GAME_ID, can_start, readiness_summary,
};
pub use login::{
    AUTH_LOGIN_ID, LOGIN_STATUS_ID, LoginScreen, MIN_NAME_LEN, NAME_ENTRY_ID, NAME_INPUT_ID,
    NAME_LOGIN_ID, validate_name,
};
pub use main_menu::{
    CREATE_GAME_ID, JOIN_CODE_ID, JOIN_CODE_LEN, JOIN_GAME_ID, LOGOUT_ID, MENU_STATUS_ID,
    MainMenuScreen, USER_NAME_ID, normalize_join_code,
};
pub use party_setup::{
    CHARACTER_SUMMARY_ID, CHOOSE_CHARACTER_ID, CREATE_PARTY_GAME_ID, PARTY_BACK_ID,
    PARTY_STATUS_ID, PartySetupScreen, SelectedCharacter,
};

use tracing::instrument;

use crate::element::Element;
use crate::party::CharacterClass;
use crate::session::ScreenId;

/// Builds the region layout for a screen.
#[instrument]
pub fn layout(id: ScreenId) -> Element {
    match id {
        ScreenId::Login => login::layout(),
        ScreenId::MainMenu => main_menu::layout(),
        ScreenId::PartySetup => party_setup::layout(),
        ScreenId::Lobby => lobby::layout(),
        ScreenId::Game => game::layout(),
        ScreenId::Loading => loading::layout(),
    }
}

/// One handler per screen, constructed once and reused.
#[derive(Debug)]
pub struct Screens {
    login: LoginScreen,
    main_menu: MainMenuScreen,
    party_setup: PartySetupScreen,
    lobby: LobbyScreen,
    game: GameScreen,
    loading: LoadingScreen,
}

impl Screens {
    /// Builds every handler.
    #[instrument]
    pub fn new(default_party: Vec<CharacterClass>) -> Self {
        Self {
            login: LoginScreen::new(),
            main_menu: MainMenuScreen::new(),
            party_setup: PartySetupScreen::new(default_party),
            lobby: LobbyScreen::new(),
            game: GameScreen::new(),
            loading: LoadingScreen::new(),
        }
    }

    /// Handler for a screen.
    pub fn get_mut(&mut self, id: ScreenId) -> &mut dyn ScreenHandler {
        match id {
            ScreenId::Login => &mut self.login,
            ScreenId::MainMenu => &mut self.main_menu,
            ScreenId::PartySetup => &mut self.party_setup,
            ScreenId::Lobby => &mut self.lobby,
            ScreenId::Game => &mut self.game,
            ScreenId::Loading => &mut self.loading,
        }
    }

    /// The main menu handler.
    pub fn main_menu(&self) -> &MainMenuScreen {
        &self.main_menu
    }

    /// The party setup handler.
    pub fn party_setup(&self) -> &PartySetupScreen {
        &self.party_setup
    }

    /// The lobby handler.
    pub fn lobby(&self) -> &LobbyScreen {
        &self.lobby
    }
}
