//! Upward callbacks invoked on user action.

use crate::party::GameConfig;

/// Caller-supplied actions the presentation core triggers.
///
/// The core never talks to the network itself; it reports intent here and
/// waits for the next [`SessionState`](crate::SessionState) snapshot.
pub trait SessionCallbacks {
    /// Start centralized authentication.
    fn on_login(&mut self);

    /// Log in with a display name (auth disabled).
    fn on_login_with_name(&mut self, name: &str);

    /// Log out.
    fn on_logout(&mut self);

    /// Create a new game hosted by the local user.
    fn on_create_game(&mut self, character_id: &str, config: &GameConfig);

    /// Join an existing game by code.
    fn on_join_game(&mut self, code: &str, character_id: &str);

    /// Leave the current game.
    fn on_leave_game(&mut self);

    /// Toggle the local ready flag.
    fn on_set_ready(&mut self, ready: bool);

    /// Start the game (DM only).
    fn on_start_game(&mut self);

    /// Navigate from the main menu to party setup.
    fn on_navigate_to_party_setup(&mut self);

    /// Navigate back to the main menu.
    fn on_back_to_main_menu(&mut self);

    /// Whether centralized authentication is enabled.
    fn is_auth_enabled(&self) -> bool;
}
