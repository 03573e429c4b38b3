//! Offline loopback session for playing through the screens without a server.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, instrument};

use crate::callbacks::SessionCallbacks;
use crate::party::GameConfig;
use crate::session::{
    CharacterSummary, ConnectionStatus, LocalUser, RosterEntry, ScreenId, SessionState,
};

/// Shared snapshot the loopback session writes and the app reads.
pub type SharedState = Rc<RefCell<SessionState>>;

/// Answers every callback locally by rewriting the shared snapshot.
#[derive(Debug)]
pub struct LocalSession {
    state: SharedState,
    auth_enabled: bool,
    games_created: u32,
}

impl LocalSession {
    /// Creates a session on the login screen, already connected.
    #[instrument]
    pub fn new(auth_enabled: bool) -> Self {
        let state = SessionState::on(ScreenId::Login).with_connection(ConnectionStatus::Connected);
        Self {
            state: Rc::new(RefCell::new(state)),
            auth_enabled,
            games_created: 0,
        }
    }

    /// Handle to the shared snapshot.
    pub fn state(&self) -> SharedState {
        Rc::clone(&self.state)
    }

    /// Character returned by the offline character picker.
    #[instrument]
    pub fn pick_character() -> CharacterSummary {
        CharacterSummary::new("hero-1".into(), "Aria".into(), "ranger".into(), 3)
    }

    fn replace<F: FnOnce(SessionState) -> SessionState>(&self, f: F) {
        let current = self.state.borrow().clone();
        let next = f(current);
        debug!(screen = %next.screen(), "Offline snapshot updated");
        *self.state.borrow_mut() = next;
    }

    fn local_name(&self) -> String {
        self.state
            .borrow()
            .user()
            .as_ref()
            .map(|u| u.display_name().clone())
            .unwrap_or_else(|| "Player".to_string())
    }

    fn log_in(&self, name: &str) {
        let user = LocalUser::new("local".into(), name.to_string());
        self.replace(|s| s.with_user(user).with_screen(ScreenId::MainMenu));
    }
}

impl SessionCallbacks for LocalSession {
    fn on_login(&mut self) {
        info!("Offline login");
        self.log_in("Player");
    }

    fn on_login_with_name(&mut self, name: &str) {
        info!(name, "Offline name login");
        self.log_in(name);
    }

    fn on_logout(&mut self) {
        self.replace(|_| {
            SessionState::on(ScreenId::Login).with_connection(ConnectionStatus::Connected)
        });
    }

    fn on_create_game(&mut self, character_id: &str, config: &GameConfig) {
        self.games_created += 1;
        let code = format!("LCL{:03}", self.games_created % 1000);
        info!(code = %code, npc_count = config.npc_count(), "Offline game created");
        let host = RosterEntry::new(
            self.local_name(),
            Some(character_id.to_string()),
            true,
            false,
            true,
        );
        let guest = RosterEntry::new("Guest".into(), Some("Bram".into()), true, true, false);
        self.replace(|s| {
            s.with_screen(ScreenId::Lobby)
                .with_join_code(code)
                .with_players(vec![host, guest])
                .with_dm(true)
        });
    }

    fn on_join_game(&mut self, code: &str, character_id: &str) {
        info!(code, "Offline join");
        let host = RosterEntry::new("Host".into(), Some("Dm".into()), true, false, true);
        let me = RosterEntry::new(
            self.local_name(),
            Some(character_id.to_string()),
            true,
            false,
            false,
        );
        let code = code.to_string();
        self.replace(|s| {
            s.with_screen(ScreenId::Lobby)
                .with_join_code(code)
                .with_players(vec![host, me])
                .with_dm(false)
        });
    }

    fn on_leave_game(&mut self) {
        self.replace(|s| {
            let user = s.user().clone();
            let mut next = SessionState::on(ScreenId::MainMenu)
                .with_connection(*s.connection_status());
            if let Some(user) = user {
                next = next.with_user(user);
            }
            next
        });
    }

    fn on_set_ready(&mut self, ready: bool) {
        let name = self.local_name();
        self.replace(|s| {
            let players = s
                .players()
                .iter()
                .map(|p| {
                    if *p.name() == name {
                        RosterEntry::new(
                            p.name().clone(),
                            p.character_name().clone(),
                            *p.connected(),
                            ready,
                            *p.is_dm(),
                        )
                    } else {
                        p.clone()
                    }
                })
                .collect();
            s.with_players(players)
        });
    }

    fn on_start_game(&mut self) {
        self.replace(|s| s.with_screen(ScreenId::Game));
    }

    fn on_navigate_to_party_setup(&mut self) {
        self.replace(|s| s.with_screen(ScreenId::PartySetup));
    }

    fn on_back_to_main_menu(&mut self) {
        self.replace(|s| s.with_screen(ScreenId::MainMenu));
    }

    fn is_auth_enabled(&self) -> bool {
        self.auth_enabled
    }
}
