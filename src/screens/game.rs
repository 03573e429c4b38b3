//! Game screen. The world itself is rendered elsewhere; this screen only
//! clears panels left over from the pre-game flow.

use tracing::{debug, instrument};

use crate::element::{Element, ElementKind, ElementSpec, create_element};
use crate::screens::handler::{ScreenContext, ScreenHandler};
use crate::session::{ScreenId, SessionState};

/// Auxiliary panels hidden when the game starts.
pub const LEGACY_REGIONS: [&str; 2] = ["legacy-party-panel", "legacy-lobby-panel"];

/// Mount point for the external world renderer.
pub const GAME_VIEW_ID: &str = "game-view";

pub(crate) fn layout() -> Element {
    create_element(
        ElementSpec::new(ElementKind::Container)
            .id(ScreenId::Game.region_id())
            .class("screen")
            .hide(true)
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id(GAME_VIEW_ID)
                    .text("Game in progress"),
            ),
    )
}

/// Game screen.
#[derive(Debug, Default)]
pub struct GameScreen;

impl GameScreen {
    /// Creates the game screen.
    pub fn new() -> Self {
        Self
    }
}

impl ScreenHandler for GameScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Game
    }

    #[instrument(skip(self, _state, ctx))]
    fn enter(&mut self, _state: &SessionState, ctx: &mut ScreenContext<'_>) {
        for name in LEGACY_REGIONS {
            if let Some(panel) = ctx.regions.auxiliary_mut(name) {
                debug!(panel = name, "Hiding legacy panel");
                panel.set_hidden(true);
            }
        }
    }
}
