//! Login screen: centralized auth button or name entry.

use tracing::{debug, info, instrument};

use crate::element::{Element, ElementKind, ElementSpec, create_element};
use crate::screens::handler::{Effect, ScreenContext, ScreenHandler, UiEvent};
use crate::screens::loading::status_text;
use crate::session::{ScreenId, SessionState};

/// Inline status line.
pub const LOGIN_STATUS_ID: &str = "login-status";
/// Centralized auth button.
pub const AUTH_LOGIN_ID: &str = "login-button";
/// Name entry group, shown only when auth is disabled.
pub const NAME_ENTRY_ID: &str = "name-entry";
/// Name field.
pub const NAME_INPUT_ID: &str = "login-name";
/// Submit button for name login.
pub const NAME_LOGIN_ID: &str = "login-with-name";

/// Shortest accepted display name after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// Builds the login region.
pub(crate) fn layout() -> Element {
    create_element(
        ElementSpec::new(ElementKind::Container)
            .id(ScreenId::Login.region_id())
            .class("screen")
            .hide(true)
            .child(
                ElementSpec::new(ElementKind::Heading)
                    .class("title")
                    .text("Tactics Online"),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(AUTH_LOGIN_ID)
                    .class("btn primary")
                    .text("Log In"),
            )
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id(NAME_ENTRY_ID)
                    .hide(true)
                    .child(
                        ElementSpec::new(ElementKind::Input)
                            .id(NAME_INPUT_ID)
                            .text("Name")
                            .attr("placeholder", "Your name"),
                    )
                    .child(
                        ElementSpec::new(ElementKind::Button)
                            .id(NAME_LOGIN_ID)
                            .class("btn")
                            .text("Play"),
                    ),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(LOGIN_STATUS_ID)
                    .class("status"),
            ),
    )
}

/// Validates a display name, returning the trimmed name.
#[instrument]
pub fn validate_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(format!("Name must be at least {} characters", MIN_NAME_LEN));
    }
    Ok(name.to_string())
}

/// Login screen state.
#[derive(Debug, Default)]
pub struct LoginScreen {
    name_input: String,
}

impl LoginScreen {
    /// Creates the login screen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn set_status(&self, ctx: &mut ScreenContext<'_>, text: &str) {
        ctx.with_element(ScreenId::Login, LOGIN_STATUS_ID, |s| s.set_text(text));
    }
}

impl ScreenHandler for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    #[instrument(skip(self, _state, ctx))]
    fn enter(&mut self, _state: &SessionState, ctx: &mut ScreenContext<'_>) {
        let auth_enabled = ctx.callbacks.is_auth_enabled();
        debug!(auth_enabled, "Entering login");
        self.set_status(ctx, "");
        ctx.with_element(ScreenId::Login, NAME_ENTRY_ID, |e| {
            e.set_hidden(auth_enabled)
        });
        ctx.with_element(ScreenId::Login, AUTH_LOGIN_ID, |e| {
            e.set_hidden(!auth_enabled)
        });
    }

    #[instrument(skip(self, state, ctx), fields(status = %state.connection_status()))]
    fn update(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>) {
        if state.connection_status().is_pending() {
            self.set_status(ctx, status_text(*state.connection_status()));
        }
    }

    #[instrument(skip(self, ctx))]
    fn handle_event(&mut self, event: &UiEvent, ctx: &mut ScreenContext<'_>) -> Effect {
        match event {
            UiEvent::Input { id, value } if id == NAME_INPUT_ID => {
                self.name_input = value.clone();
                ctx.with_element(ScreenId::Login, NAME_INPUT_ID, |e| e.set_value(value.as_str()));
            }
            UiEvent::Click(id) if id == AUTH_LOGIN_ID => {
                info!("Starting centralized login");
                ctx.callbacks.on_login();
            }
            UiEvent::Click(id) if id == NAME_LOGIN_ID => match validate_name(&self.name_input) {
                Ok(name) => {
                    info!(name = %name, "Logging in with name");
                    self.set_status(ctx, "Logging in...");
                    ctx.callbacks.on_login_with_name(&name);
                }
                Err(message) => {
                    debug!(message = %message, "Name rejected");
                    self.set_status(ctx, &message);
                }
            },
            _ => {}
        }
        Effect::None
    }
}
