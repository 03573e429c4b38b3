//! Loading screen: a status line that tracks the connection.

use tracing::{debug, instrument};

use crate::element::{Element, ElementKind, ElementSpec, create_element};
use crate::screens::handler::{ScreenContext, ScreenHandler};
use crate::session::{ConnectionStatus, ScreenId, SessionState};

/// Status line.
pub const LOADING_STATUS_ID: &str = "loading-status";

/// Human-readable status for a connection state.
#[instrument]
pub fn status_text(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "Waiting for connection...",
        ConnectionStatus::Connecting => "Connecting to server...",
        ConnectionStatus::Authenticating => "Signing in...",
        ConnectionStatus::Connected => "Loading...",
        ConnectionStatus::Reconnecting => "Connection lost. Reconnecting...",
    }
}

pub(crate) fn layout() -> Element {
    create_element(
        ElementSpec::new(ElementKind::Container)
            .id(ScreenId::Loading.region_id())
            .class("screen")
            .hide(true)
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(LOADING_STATUS_ID)
                    .class("status")
                    .text(status_text(ConnectionStatus::Disconnected)),
            ),
    )
}

/// Loading screen.
#[derive(Debug, Default)]
pub struct LoadingScreen;

impl LoadingScreen {
    /// Creates the loading screen.
    pub fn new() -> Self {
        Self
    }

    fn refresh(&self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        let text = status_text(*state.connection_status());
        debug!(text, "Loading status");
        ctx.with_element(ScreenId::Loading, LOADING_STATUS_ID, |e| e.set_text(text));
    }
}

impl ScreenHandler for LoadingScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Loading
    }

    #[instrument(skip(self, state, ctx))]
    fn enter(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.refresh(state, ctx);
    }

    #[instrument(skip(self, state, ctx))]
    fn update(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.refresh(state, ctx);
    }
}
