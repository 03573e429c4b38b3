//! Lobby: join code, roster, readiness and the DM's start control.

use tracing::{debug, info, instrument};

use crate::element::{Element, ElementKind, ElementSpec, create_element, mount};
use crate::screens::handler::{Effect, ScreenContext, ScreenHandler, UiEvent};
use crate::session::{RosterEntry, ScreenId, SessionState};

/// Join code display.
pub const LOBBY_CODE_ID: &str = "lobby-join-code";
/// Roster list.
pub const ROSTER_ID: &str = "lobby-roster";
/// Readiness summary line.
pub const READINESS_ID: &str = "lobby-readiness";
/// DM-only start button.
pub const START_GAME_ID: &str = "start-game";
/// Local ready toggle.
pub const READY_TOGGLE_ID: &str = "ready-toggle";
/// Leave button.
pub const LEAVE_GAME_ID: &str = "leave-game";

const READY_LABEL: &str = "Ready";
const UNREADY_LABEL: &str = "Not Ready";
const READY_ACTIVE_CLASS: &str = "active";

/// Summarizes roster readiness for display.
///
/// ```
/// use tactics_lobby::{RosterEntry, readiness_summary};
///
/// let roster = vec![
///     RosterEntry::new("ana".into(), None, true, true, false),
///     RosterEntry::new("bo".into(), None, true, false, true),
///     RosterEntry::new("cy".into(), None, true, false, false),
/// ];
/// assert_eq!(readiness_summary(&roster, false), "2/3 ready");
/// ```
#[instrument(skip(players), fields(count = players.len()))]
pub fn readiness_summary(players: &[RosterEntry], is_dm: bool) -> String {
    if players.len() < 2 {
        return "Waiting for players...".to_string();
    }
    let ready = players.iter().filter(|p| p.ready_or_dm()).count();
    if ready == players.len() {
        if is_dm {
            "All players ready! Start the game when you are.".to_string()
        } else {
            "All players ready. Waiting for the DM to start.".to_string()
        }
    } else {
        format!("{}/{} ready", ready, players.len())
    }
}

/// True when the roster is non-empty and every entry is ready or the DM.
pub fn can_start(players: &[RosterEntry]) -> bool {
    !players.is_empty() && players.iter().all(RosterEntry::ready_or_dm)
}

pub(crate) fn layout() -> Element {
    create_element(
        ElementSpec::new(ElementKind::Container)
            .id(ScreenId::Lobby.region_id())
            .class("screen")
            .hide(true)
            .child(
                ElementSpec::new(ElementKind::Heading)
                    .class("title")
                    .text("Lobby"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(LOBBY_CODE_ID)
                    .class("join-code"),
            )
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id(ROSTER_ID)
                    .class("roster"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(READINESS_ID)
                    .class("status"),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(READY_TOGGLE_ID)
                    .class("btn")
                    .text(READY_LABEL),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(START_GAME_ID)
                    .class("btn primary")
                    .text("Start Game")
                    .hide(true)
                    .disable(true),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(LEAVE_GAME_ID)
                    .class("btn secondary")
                    .text("Leave"),
            ),
    )
}

/// Lobby state.
#[derive(Debug, Default)]
pub struct LobbyScreen {
    ready: bool,
    is_dm: bool,
    can_start: bool,
}

impl LobbyScreen {
    /// Creates the lobby screen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Local ready toggle state.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[instrument(skip(self, state, ctx), fields(players = state.players().len()))]
    fn render_roster(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.is_dm = *state.is_dm();
        self.can_start = can_start(state.players());
        let summary = readiness_summary(state.players(), self.is_dm);
        let (is_dm, can_start) = (self.is_dm, self.can_start);

        let Some(region) = ctx.region(ScreenId::Lobby) else {
            return;
        };
        if let Some(roster) = region.find_mut(ROSTER_ID) {
            roster.clear_children();
            for player in state.players() {
                mount(roster, roster_row(player), false);
            }
        }
        region.with(READINESS_ID, |e| e.set_text(summary));
        region.with(START_GAME_ID, |e| {
            e.set_hidden(!is_dm);
            e.set_disabled(!can_start);
        });
    }

    fn render_ready_toggle(&self, ctx: &mut ScreenContext<'_>) {
        let ready = self.ready;
        ctx.with_element(ScreenId::Lobby, READY_TOGGLE_ID, |e| {
            if ready {
                e.set_text(UNREADY_LABEL);
                e.add_class(READY_ACTIVE_CLASS);
            } else {
                e.set_text(READY_LABEL);
                e.remove_class(READY_ACTIVE_CLASS);
            }
        });
    }
}

fn roster_row(player: &RosterEntry) -> ElementSpec {
    let mut class = String::from("roster-entry");
    class.push_str(if *player.ready() { " ready" } else { " not-ready" });
    if *player.is_dm() {
        class.push_str(" dm");
    }
    if !*player.connected() {
        class.push_str(" disconnected");
    }

    let mut row = ElementSpec::new(ElementKind::Item).class(class).child(
        ElementSpec::new(ElementKind::Text)
            .class("player-name")
            .text(player.name().as_str()),
    );
    if let Some(character) = player.character_name() {
        row = row.child(
            ElementSpec::new(ElementKind::Text)
                .class("character-name")
                .text(character.as_str()),
        );
    }
    let badge = if *player.is_dm() {
        "DM"
    } else if *player.ready() {
        "Ready"
    } else {
        "Not ready"
    };
    row.child(
        ElementSpec::new(ElementKind::Text)
            .class("badge")
            .text(badge),
    )
}

impl ScreenHandler for LobbyScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Lobby
    }

    #[instrument(skip(self, state, ctx))]
    fn enter(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        let code = state.join_code().clone().unwrap_or_default();
        debug!(code = %code, "Entering lobby");
        ctx.with_element(ScreenId::Lobby, LOBBY_CODE_ID, |e| {
            e.set_text(format!("Join code: {}", code))
        });
        self.render_roster(state, ctx);
        self.render_ready_toggle(ctx);
    }

    #[instrument(skip(self, state, ctx))]
    fn update(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.render_roster(state, ctx);
    }

    #[instrument(skip(self, ctx))]
    fn exit(&mut self, ctx: &mut ScreenContext<'_>) {
        self.ready = false;
        self.render_ready_toggle(ctx);
    }

    #[instrument(skip(self, ctx))]
    fn handle_event(&mut self, event: &UiEvent, ctx: &mut ScreenContext<'_>) -> Effect {
        match event {
            UiEvent::Click(id) if id == READY_TOGGLE_ID => {
                self.ready = !self.ready;
                info!(ready = self.ready, "Ready toggled");
                self.render_ready_toggle(ctx);
                ctx.callbacks.on_set_ready(self.ready);
            }
            UiEvent::Click(id) if id == START_GAME_ID => {
                if self.is_dm && self.can_start {
                    info!("Starting game");
                    ctx.callbacks.on_start_game();
                } else {
                    debug!(is_dm = self.is_dm, can_start = self.can_start, "Start ignored");
                }
            }
            UiEvent::Click(id) if id == LEAVE_GAME_ID => {
                info!("Leaving game");
                ctx.callbacks.on_leave_game();
            }
            _ => {}
        }
        Effect::None
    }
}
