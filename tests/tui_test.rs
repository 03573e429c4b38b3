//! Tests for the terminal front end: focus, key mapping, rendering and the
//! offline loopback session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tactics_lobby::{
    CHOOSE_CHARACTER_ID, CREATE_GAME_ID, CREATE_PARTY_GAME_ID, ClientConfig, KeyAction,
    LEAVE_GAME_ID, NAME_INPUT_ID, NAME_LOGIN_ID, ScreenId, ScreenRegions, START_GAME_ID,
    TerminalApp, UiEvent, draw_region, element_lines, focusable_ids,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut TerminalApp, text: &str) {
    for c in text.chars() {
        let action = app.map_key(key(KeyCode::Char(c)));
        assert!(app.apply(action));
    }
}

#[test]
fn test_login_focus_skips_hidden_controls() {
    let app = TerminalApp::new(&ClientConfig::default());
    let region = app
        .manager()
        .regions()
        .region(ScreenId::Login)
        .expect("login region");
    assert_eq!(
        focusable_ids(region),
        vec![NAME_INPUT_ID.to_string(), NAME_LOGIN_ID.to_string()]
    );
    assert_eq!(app.focused_id().as_deref(), Some(NAME_INPUT_ID));
}

#[test]
fn test_auth_login_focuses_button_only() {
    let app = TerminalApp::new(&ClientConfig::default().with_auth_enabled(true));
    let region = app
        .manager()
        .regions()
        .region(ScreenId::Login)
        .expect("login region");
    assert_eq!(focusable_ids(region), vec![tactics_lobby::AUTH_LOGIN_ID.to_string()]);
}

#[test]
fn test_key_mapping() {
    let app = TerminalApp::new(&ClientConfig::default());
    assert_eq!(
        app.map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        KeyAction::Quit
    );
    assert_eq!(app.map_key(key(KeyCode::Tab)), KeyAction::Focus(1));
    assert_eq!(app.map_key(key(KeyCode::Up)), KeyAction::Focus(-1));
    assert_eq!(
        app.map_key(key(KeyCode::Esc)),
        KeyAction::Event(UiEvent::DragCancel)
    );
    assert_eq!(
        app.map_key(key(KeyCode::Char('x'))),
        KeyAction::Event(UiEvent::input(NAME_INPUT_ID, "x"))
    );
    assert_eq!(
        app.map_key(key(KeyCode::Enter)),
        KeyAction::Event(UiEvent::click(NAME_INPUT_ID))
    );
}

#[test]
fn test_focus_wraps_around() {
    let mut app = TerminalApp::new(&ClientConfig::default());
    assert!(app.apply(KeyAction::Focus(-1)));
    assert_eq!(app.focused_id().as_deref(), Some(NAME_LOGIN_ID));
    assert!(app.apply(KeyAction::Focus(1)));
    assert_eq!(app.focused_id().as_deref(), Some(NAME_INPUT_ID));
}

#[test]
fn test_typing_and_backspace_edit_the_name() {
    let mut app = TerminalApp::new(&ClientConfig::default());
    type_text(&mut app, "Jon");
    let action = app.map_key(key(KeyCode::Backspace));
    assert!(app.apply(action));
    let value = app
        .manager()
        .regions()
        .region(ScreenId::Login)
        .and_then(|r| r.find(NAME_INPUT_ID))
        .map(|e| e.value().to_string());
    assert_eq!(value.as_deref(), Some("Jo"));
}

#[test]
fn test_quit_stops_the_loop() {
    let mut app = TerminalApp::new(&ClientConfig::default());
    assert!(!app.apply(KeyAction::Quit));
}

#[test]
fn test_offline_session_plays_through_to_game() {
    let mut app = TerminalApp::new(&ClientConfig::default());
    type_text(&mut app, "Mira");
    app.apply(KeyAction::Focus(1));
    let enter = app.map_key(key(KeyCode::Enter));
    app.apply(enter);
    assert_eq!(app.manager().active(), ScreenId::MainMenu);
    assert_eq!(app.focused_id().as_deref(), Some(CREATE_GAME_ID));

    app.apply(KeyAction::Event(UiEvent::click(CREATE_GAME_ID)));
    assert_eq!(app.manager().active(), ScreenId::PartySetup);

    app.apply(KeyAction::Event(UiEvent::click(CHOOSE_CHARACTER_ID)));
    assert!(app.manager().screens().party_setup().selected().is_some());

    app.apply(KeyAction::Event(UiEvent::click(CREATE_PARTY_GAME_ID)));
    assert_eq!(app.manager().active(), ScreenId::Lobby);

    app.apply(KeyAction::Event(UiEvent::click(START_GAME_ID)));
    assert_eq!(app.manager().active(), ScreenId::Game);
}

#[test]
fn test_offline_leave_returns_to_menu() {
    let config = ClientConfig::from_toml("player_name = \"Mira\"").expect("config");
    let mut app = TerminalApp::new(&config);
    app.apply(KeyAction::Event(UiEvent::click(NAME_LOGIN_ID)));
    app.apply(KeyAction::Event(UiEvent::click(CREATE_GAME_ID)));
    app.apply(KeyAction::Event(UiEvent::click(CHOOSE_CHARACTER_ID)));
    app.apply(KeyAction::Event(UiEvent::click(CREATE_PARTY_GAME_ID)));
    assert_eq!(app.manager().active(), ScreenId::Lobby);

    app.apply(KeyAction::Event(UiEvent::click(LEAVE_GAME_ID)));
    assert_eq!(app.manager().active(), ScreenId::MainMenu);
}

#[test]
fn test_element_lines_skip_hidden_nodes() {
    let app = TerminalApp::new(&ClientConfig::default());
    let region = app
        .manager()
        .regions()
        .region(ScreenId::Login)
        .expect("login region");
    let text: Vec<String> = element_lines(region, Some(NAME_LOGIN_ID))
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert!(text.iter().any(|l| l.contains("> [ Play ]")));
    assert!(!text.iter().any(|l| l.contains("[ Log In ]")));
}

#[test]
fn test_draw_region_renders_indicator_and_help() {
    let app = TerminalApp::new(&ClientConfig::default());
    let backend = TestBackend::new(60, 20);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let regions = app.manager().regions();
    terminal
        .draw(|f| {
            draw_region(
                f,
                regions.region(ScreenId::Login),
                regions.indicator(),
                None,
                "Ctrl+C: Quit",
            )
        })
        .expect("draw");

    let rendered: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(rendered.contains("Connected"));
    assert!(rendered.contains("Tactics Online"));
    assert!(rendered.contains("Ctrl+C: Quit"));
}
