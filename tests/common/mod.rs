//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tactics_lobby::{
    CharacterClass, CharacterSummary, ConnectionStatus, GameConfig, LocalUser, MemoryRegions,
    RosterEntry, ScreenId, ScreenManager, SessionCallbacks, SessionState,
};

/// A callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login,
    LoginWithName(String),
    Logout,
    CreateGame(String, GameConfig),
    JoinGame(String, String),
    LeaveGame,
    SetReady(bool),
    StartGame,
    NavigateToPartySetup,
    BackToMainMenu,
}

/// Records every callback into a shared log.
#[derive(Debug, Clone)]
pub struct Recorder {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub auth_enabled: bool,
}

impl Recorder {
    pub fn new(auth_enabled: bool) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            auth_enabled,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl SessionCallbacks for Recorder {
    fn on_login(&mut self) {
        self.calls.borrow_mut().push(Call::Login);
    }
    fn on_login_with_name(&mut self, name: &str) {
        self.calls.borrow_mut().push(Call::LoginWithName(name.to_string()));
    }
    fn on_logout(&mut self) {
        self.calls.borrow_mut().push(Call::Logout);
    }
    fn on_create_game(&mut self, character_id: &str, config: &GameConfig) {
        self.calls
            .borrow_mut()
            .push(Call::CreateGame(character_id.to_string(), config.clone()));
    }
    fn on_join_game(&mut self, code: &str, character_id: &str) {
        self.calls
            .borrow_mut()
            .push(Call::JoinGame(code.to_string(), character_id.to_string()));
    }
    fn on_leave_game(&mut self) {
        self.calls.borrow_mut().push(Call::LeaveGame);
    }
    fn on_set_ready(&mut self, ready: bool) {
        self.calls.borrow_mut().push(Call::SetReady(ready));
    }
    fn on_start_game(&mut self) {
        self.calls.borrow_mut().push(Call::StartGame);
    }
    fn on_navigate_to_party_setup(&mut self) {
        self.calls.borrow_mut().push(Call::NavigateToPartySetup);
    }
    fn on_back_to_main_menu(&mut self) {
        self.calls.borrow_mut().push(Call::BackToMainMenu);
    }
    fn is_auth_enabled(&self) -> bool {
        self.auth_enabled
    }
}

/// Default companions used by tests.
pub fn default_party() -> Vec<CharacterClass> {
    vec![CharacterClass::Warrior, CharacterClass::Cleric]
}

/// Manager over the standard regions with a recorder attached.
pub fn manager(auth_enabled: bool) -> (ScreenManager<MemoryRegions>, Recorder) {
    let recorder = Recorder::new(auth_enabled);
    let manager = ScreenManager::new(
        MemoryRegions::standard(),
        Box::new(recorder.clone()),
        default_party(),
    );
    (manager, recorder)
}

/// Connected snapshot on the given screen with a user.
pub fn connected(screen: ScreenId) -> SessionState {
    SessionState::on(screen)
        .with_connection(ConnectionStatus::Connected)
        .with_user(LocalUser::new("u1".into(), "Mira".into()))
}

/// Roster entry shorthand.
pub fn player(name: &str, ready: bool, is_dm: bool) -> RosterEntry {
    RosterEntry::new(name.to_string(), None, true, ready, is_dm)
}

/// A resolved character selection.
pub fn hero() -> CharacterSummary {
    CharacterSummary::new("c-42".into(), "Tamsin".into(), "rogue".into(), 4)
}

/// Text of an element inside a screen region.
pub fn text_of(manager: &ScreenManager<MemoryRegions>, screen: ScreenId, id: &str) -> String {
    use tactics_lobby::ScreenRegions;
    manager
        .regions()
        .region(screen)
        .and_then(|r| r.find(id))
        .map(|e| e.text().clone())
        .unwrap_or_default()
}

/// Looks up an element inside a screen region.
pub fn element<'a>(
    manager: &'a ScreenManager<MemoryRegions>,
    screen: ScreenId,
    id: &str,
) -> &'a tactics_lobby::Element {
    use tactics_lobby::ScreenRegions;
    manager
        .regions()
        .region(screen)
        .and_then(|r| r.find(id))
        .expect("element present")
}
