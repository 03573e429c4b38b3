//! Tests for lobby readiness and the DM start control.

mod common;

use common::{Call, connected, manager, player};
use tactics_lobby::{
    LEAVE_GAME_ID, LOBBY_CODE_ID, READINESS_ID, READY_TOGGLE_ID, ROSTER_ID, START_GAME_ID,
    ScreenId, SessionState, UiEvent, can_start, readiness_summary,
};

fn lobby(players: Vec<tactics_lobby::RosterEntry>, is_dm: bool) -> SessionState {
    connected(ScreenId::Lobby)
        .with_join_code("QX7K2P")
        .with_players(players)
        .with_dm(is_dm)
}

#[test]
fn test_summary_waits_for_a_second_player() {
    assert_eq!(readiness_summary(&[], false), "Waiting for players...");
    assert_eq!(
        readiness_summary(&[player("solo", true, true)], true),
        "Waiting for players..."
    );
}

#[test]
fn test_summary_counts_dm_as_ready() {
    let roster = vec![
        player("dm", false, true),
        player("a", true, false),
        player("b", false, false),
    ];
    assert_eq!(readiness_summary(&roster, false), "2/3 ready");
}

#[test]
fn test_summary_all_ready_depends_on_viewer() {
    let roster = vec![player("dm", false, true), player("a", true, false)];
    assert_eq!(
        readiness_summary(&roster, true),
        "All players ready! Start the game when you are."
    );
    assert_eq!(
        readiness_summary(&roster, false),
        "All players ready. Waiting for the DM to start."
    );
}

#[test]
fn test_start_requires_everyone_ready() {
    assert!(!can_start(&[]));
    assert!(can_start(&[player("dm", false, true)]));
    assert!(!can_start(&[player("dm", false, true), player("a", false, false)]));
    assert!(can_start(&[player("dm", false, true), player("a", true, false)]));
}

#[test]
fn test_enter_renders_code_and_roster() {
    let (mut manager, _) = manager(false);
    let roster = vec![player("dm", false, true), player("a", false, false)];
    manager.update(&lobby(roster, false));

    assert_eq!(
        common::text_of(&manager, ScreenId::Lobby, LOBBY_CODE_ID),
        "Join code: QX7K2P"
    );
    let rows = common::element(&manager, ScreenId::Lobby, ROSTER_ID).children();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].has_class("dm"));
    assert!(rows[1].has_class("not-ready"));
    assert_eq!(
        common::text_of(&manager, ScreenId::Lobby, READINESS_ID),
        "1/2 ready"
    );
}

#[test]
fn test_start_button_visible_only_to_dm() {
    let (mut manager, _) = manager(false);
    let roster = vec![player("dm", false, true), player("a", true, false)];
    manager.update(&lobby(roster.clone(), false));
    assert!(*common::element(&manager, ScreenId::Lobby, START_GAME_ID).hidden());

    manager.update(&lobby(roster, true));
    let start = common::element(&manager, ScreenId::Lobby, START_GAME_ID);
    assert!(!start.hidden());
    assert!(!start.disabled());
}

#[test]
fn test_start_disabled_until_all_ready() {
    let (mut manager, recorder) = manager(false);
    let waiting = vec![player("dm", false, true), player("a", false, false)];
    manager.update(&lobby(waiting, true));
    assert!(*common::element(&manager, ScreenId::Lobby, START_GAME_ID).disabled());

    manager.dispatch(UiEvent::click(START_GAME_ID));
    assert!(recorder.calls().is_empty());

    let ready = vec![player("dm", false, true), player("a", true, false)];
    manager.update(&lobby(ready, true));
    assert!(!common::element(&manager, ScreenId::Lobby, START_GAME_ID).disabled());
    manager.dispatch(UiEvent::click(START_GAME_ID));
    assert_eq!(recorder.calls(), vec![Call::StartGame]);
}

#[test]
fn test_non_dm_cannot_start() {
    let (mut manager, recorder) = manager(false);
    let ready = vec![player("dm", false, true), player("a", true, false)];
    manager.update(&lobby(ready, false));
    manager.dispatch(UiEvent::click(START_GAME_ID));
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_ready_toggle_reports_and_relabels() {
    let (mut manager, recorder) = manager(false);
    manager.update(&lobby(vec![player("dm", false, true)], false));

    manager.dispatch(UiEvent::click(READY_TOGGLE_ID));
    let toggle = common::element(&manager, ScreenId::Lobby, READY_TOGGLE_ID);
    assert_eq!(toggle.text(), "Not Ready");
    assert!(toggle.has_class("active"));
    assert!(manager.screens().lobby().is_ready());

    manager.dispatch(UiEvent::click(READY_TOGGLE_ID));
    assert_eq!(
        recorder.calls(),
        vec![Call::SetReady(true), Call::SetReady(false)]
    );
    assert_eq!(
        common::text_of(&manager, ScreenId::Lobby, READY_TOGGLE_ID),
        "Ready"
    );
}

#[test]
fn test_ready_resets_on_exit() {
    let (mut manager, _) = manager(false);
    manager.update(&lobby(vec![player("dm", false, true)], false));
    manager.dispatch(UiEvent::click(READY_TOGGLE_ID));
    assert!(manager.screens().lobby().is_ready());

    manager.update(&connected(ScreenId::MainMenu));
    assert!(!manager.screens().lobby().is_ready());
    let toggle = common::element(&manager, ScreenId::Lobby, READY_TOGGLE_ID);
    assert_eq!(toggle.text(), "Ready");
    assert!(!toggle.has_class("active"));
}

#[test]
fn test_roster_rerenders_on_update() {
    let (mut manager, _) = manager(false);
    manager.update(&lobby(vec![player("dm", false, true)], false));
    assert_eq!(
        common::text_of(&manager, ScreenId::Lobby, READINESS_ID),
        "Waiting for players..."
    );
    manager.update(&lobby(
        vec![
            player("dm", false, true),
            player("a", true, false),
            player("b", true, false),
        ],
        false,
    ));
    assert_eq!(
        common::element(&manager, ScreenId::Lobby, ROSTER_ID)
            .children()
            .len(),
        3
    );
    assert_eq!(
        common::text_of(&manager, ScreenId::Lobby, READINESS_ID),
        "All players ready. Waiting for the DM to start."
    );
}

#[test]
fn test_leave_reports_intent() {
    let (mut manager, recorder) = manager(false);
    manager.update(&lobby(vec![player("dm", false, true)], false));
    manager.dispatch(UiEvent::click(LEAVE_GAME_ID));
    assert_eq!(recorder.calls(), vec![Call::LeaveGame]);
}
