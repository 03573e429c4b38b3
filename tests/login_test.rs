//! Tests for login name validation and the auth-dependent layout.

mod common;

use common::{Call, manager};
use tactics_lobby::{
    AUTH_LOGIN_ID, ConnectionStatus, LOGIN_STATUS_ID, NAME_ENTRY_ID, NAME_INPUT_ID,
    NAME_LOGIN_ID, ScreenId, ScreenRegions, SessionState, UiEvent, validate_name,
};

fn login_visible(manager: &tactics_lobby::ScreenManager<tactics_lobby::MemoryRegions>, id: &str) -> bool {
    manager
        .regions()
        .region(ScreenId::Login)
        .is_some_and(|r| r.is_visible(id))
}

#[test]
fn test_names_are_trimmed_and_checked() {
    assert_eq!(validate_name("  Jo  "), Ok("Jo".to_string()));
    assert_eq!(
        validate_name(" a "),
        Err("Name must be at least 2 characters".to_string())
    );
    assert!(validate_name("").is_err());
}

#[test]
fn test_name_entry_shown_without_auth() {
    let (manager, _) = manager(false);
    assert!(login_visible(&manager, NAME_ENTRY_ID));
    assert!(!login_visible(&manager, AUTH_LOGIN_ID));
}

#[test]
fn test_auth_button_shown_with_auth() {
    let (manager, _) = manager(true);
    assert!(!login_visible(&manager, NAME_ENTRY_ID));
    assert!(!login_visible(&manager, NAME_INPUT_ID));
    assert!(login_visible(&manager, AUTH_LOGIN_ID));
}

#[test]
fn test_auth_button_starts_login() {
    let (mut manager, recorder) = manager(true);
    manager.dispatch(UiEvent::click(AUTH_LOGIN_ID));
    assert_eq!(recorder.calls(), vec![Call::Login]);
}

#[test]
fn test_short_name_is_rejected_inline() {
    let (mut manager, recorder) = manager(false);
    manager.dispatch(UiEvent::input(NAME_INPUT_ID, "x"));
    manager.dispatch(UiEvent::click(NAME_LOGIN_ID));
    assert!(recorder.calls().is_empty());
    assert_eq!(
        common::text_of(&manager, ScreenId::Login, LOGIN_STATUS_ID),
        "Name must be at least 2 characters"
    );
}

#[test]
fn test_valid_name_logs_in_trimmed() {
    let (mut manager, recorder) = manager(false);
    manager.dispatch(UiEvent::input(NAME_INPUT_ID, "  Mira "));
    manager.dispatch(UiEvent::click(NAME_LOGIN_ID));
    assert_eq!(recorder.calls(), vec![Call::LoginWithName("Mira".into())]);
    assert_eq!(
        common::text_of(&manager, ScreenId::Login, LOGIN_STATUS_ID),
        "Logging in..."
    );
}

#[test]
fn test_pending_connection_shows_status() {
    let (mut manager, _) = manager(false);
    manager.update(
        &SessionState::on(ScreenId::Login).with_connection(ConnectionStatus::Authenticating),
    );
    assert_eq!(
        common::text_of(&manager, ScreenId::Login, LOGIN_STATUS_ID),
        "Signing in..."
    );
}
