//! Main menu: create a game, join by code, or log out.

use tracing::{debug, info, instrument};

use crate::element::{Element, ElementKind, ElementSpec, create_element};
use crate::screens::handler::{Effect, ScreenContext, ScreenHandler, UiEvent};
use crate::session::{CharacterSummary, ConnectionStatus, ScreenId, SessionState};

/// Displayed user name.
pub const USER_NAME_ID: &str = "menu-user-name";
/// Navigates to party setup.
pub const CREATE_GAME_ID: &str = "create-game";
/// Join code field.
pub const JOIN_CODE_ID: &str = "join-code";
/// Join button.
pub const JOIN_GAME_ID: &str = "join-game";
/// Logout button.
pub const LOGOUT_ID: &str = "logout";
/// Inline status line.
pub const MENU_STATUS_ID: &str = "menu-status";

/// Required join code length.
pub const JOIN_CODE_LEN: usize = 6;

/// Uppercases and keeps only `[A-Z0-9]`.
#[instrument]
pub fn normalize_join_code(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

pub(crate) fn layout() -> Element {
    create_element(
        ElementSpec::new(ElementKind::Container)
            .id(ScreenId::MainMenu.region_id())
            .class("screen")
            .hide(true)
            .child(
                ElementSpec::new(ElementKind::Heading)
                    .class("title")
                    .text("Main Menu"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(USER_NAME_ID)
                    .class("user-name"),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(CREATE_GAME_ID)
                    .class("btn primary")
                    .text("Create Game")
                    .disable(true),
            )
            .child(
                ElementSpec::new(ElementKind::Input)
                    .id(JOIN_CODE_ID)
                    .text("Join code")
                    .attr("placeholder", "ABC123")
                    .attr("maxlength", JOIN_CODE_LEN.to_string()),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(JOIN_GAME_ID)
                    .class("btn")
                    .text("Join Game")
                    .disable(true),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(LOGOUT_ID)
                    .class("btn secondary")
                    .text("Log Out"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(MENU_STATUS_ID)
                    .class("status"),
            ),
    )
}

/// Main menu state.
#[derive(Debug, Default)]
pub struct MainMenuScreen {
    connection: ConnectionStatus,
    join_code: String,
    pending_join: Option<String>,
}

impl MainMenuScreen {
    /// Creates the main menu.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join code awaiting a character selection.
    pub fn pending_join(&self) -> Option<&str> {
        self.pending_join.as_deref()
    }

    /// Normalized join code currently in the field.
    pub fn join_code(&self) -> &str {
        &self.join_code
    }

    fn can_join(&self) -> bool {
        self.connection.is_connected() && self.join_code.len() == JOIN_CODE_LEN
    }

    #[instrument(skip(self, ctx), fields(connection = %self.connection))]
    fn refresh_controls(&self, ctx: &mut ScreenContext<'_>) {
        let connected = self.connection.is_connected();
        let can_join = self.can_join();
        ctx.with_element(ScreenId::MainMenu, CREATE_GAME_ID, |e| {
            e.set_disabled(!connected)
        });
        ctx.with_element(ScreenId::MainMenu, JOIN_GAME_ID, |e| e.set_disabled(!can_join));
    }

    fn set_status(&self, ctx: &mut ScreenContext<'_>, text: &str) {
        ctx.with_element(ScreenId::MainMenu, MENU_STATUS_ID, |e| e.set_text(text));
    }
}

impl ScreenHandler for MainMenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::MainMenu
    }

    #[instrument(skip(self, state, ctx))]
    fn enter(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.connection = *state.connection_status();
        self.pending_join = None;
        let name = state
            .user()
            .as_ref()
            .map(|u| u.display_name().clone())
            .unwrap_or_else(|| "Guest".to_string());
        debug!(name = %name, "Entering main menu");
        ctx.with_element(ScreenId::MainMenu, USER_NAME_ID, |e| e.set_text(name));
        self.set_status(ctx, "");
        self.refresh_controls(ctx);
    }

    #[instrument(skip(self, state, ctx))]
    fn update(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.connection = *state.connection_status();
        self.refresh_controls(ctx);
    }

    #[instrument(skip(self, ctx))]
    fn handle_event(&mut self, event: &UiEvent, ctx: &mut ScreenContext<'_>) -> Effect {
        match event {
            UiEvent::Input { id, value } if id == JOIN_CODE_ID => {
                if self.pending_join.take().is_some() {
                    debug!("Dropping pending join after code edit");
                    self.set_status(ctx, "");
                }
                self.join_code = normalize_join_code(value);
                let code = self.join_code.clone();
                ctx.with_element(ScreenId::MainMenu, JOIN_CODE_ID, |e| e.set_value(code));
                self.refresh_controls(ctx);
            }
            UiEvent::Click(id) if id == CREATE_GAME_ID => {
                if self.connection.is_connected() {
                    info!("Opening party setup");
                    ctx.callbacks.on_navigate_to_party_setup();
                }
            }
            UiEvent::Click(id) if id == JOIN_GAME_ID => {
                self.pending_join = None;
                if self.join_code.len() != JOIN_CODE_LEN {
                    self.set_status(
                        ctx,
                        &format!("Join code must be {} characters", JOIN_CODE_LEN),
                    );
                } else if self.can_join() {
                    info!(code = %self.join_code, "Requesting character for join");
                    self.pending_join = Some(self.join_code.clone());
                    self.set_status(ctx, "Choose a character to join with");
                    return Effect::RequestCharacterSelection;
                }
            }
            UiEvent::Click(id) if id == LOGOUT_ID => {
                info!("Logging out");
                ctx.callbacks.on_logout();
            }
            _ => {}
        }
        Effect::None
    }

    #[instrument(skip(self, character, ctx), fields(character_id = %character.id()))]
    fn character_selected(&mut self, character: CharacterSummary, ctx: &mut ScreenContext<'_>) {
        if let Some(code) = self.pending_join.take() {
            info!(code = %code, "Joining game");
            self.set_status(ctx, "Joining...");
            ctx.callbacks.on_join_game(&code, character.id());
        }
    }
}
