//! Tests for client config and snapshot loading.

use std::io::Write;

use tactics_lobby::{CharacterClass, ClientConfig, ConnectionStatus, ScreenId, SessionState};
use tempfile::NamedTempFile;

#[test]
fn test_defaults_when_file_is_empty() {
    let config = ClientConfig::from_toml("").expect("empty config parses");
    assert!(!config.auth_enabled());
    assert_eq!(
        config.default_party(),
        &vec![
            CharacterClass::Warrior,
            CharacterClass::Cleric,
            CharacterClass::Mage
        ]
    );
    assert!(config.player_name().is_none());
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_loads_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
auth_enabled = true
default_party = ["rogue", "paladin"]
player_name = "Mira"
"#
    )
    .expect("write config");

    let config = ClientConfig::from_file(file.path()).expect("config loads");
    assert!(*config.auth_enabled());
    assert_eq!(
        config.default_party(),
        &vec![CharacterClass::Rogue, CharacterClass::Paladin]
    );
    assert_eq!(config.player_name().as_deref(), Some("Mira"));
}

#[test]
fn test_unknown_class_is_an_error() {
    let err = ClientConfig::from_toml(r#"default_party = ["necromancer"]"#)
        .expect_err("unknown class rejected");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_reports_read_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ClientConfig::from_file(dir.path().join("absent.toml"))
        .expect_err("missing file rejected");
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error: "));
}

#[test]
fn test_snapshot_loads_from_json() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
  "screen": "lobby",
  "connection_status": "connected",
  "user": {{ "id": "u1", "display_name": "Mira" }},
  "join_code": "QX7K2P",
  "players": [
    {{ "name": "Mira", "ready": true }},
    {{ "name": "Host", "is_dm": true, "connected": true }}
  ],
  "is_dm": false
}}"#
    )
    .expect("write snapshot");

    let state = SessionState::from_json_file(file.path()).expect("snapshot loads");
    assert_eq!(*state.screen(), ScreenId::Lobby);
    assert_eq!(*state.connection_status(), ConnectionStatus::Connected);
    assert_eq!(state.join_code().as_deref(), Some("QX7K2P"));
    assert_eq!(state.players().len(), 2);
    assert!(*state.players()[0].ready());
    assert!(!state.players()[0].connected());
    assert!(*state.players()[1].is_dm());
}

#[test]
fn test_sparse_snapshot_uses_defaults() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{}}").expect("write snapshot");
    let state = SessionState::from_json_file(file.path()).expect("snapshot loads");
    assert_eq!(state, SessionState::default());
    assert_eq!(*state.screen(), ScreenId::Login);
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{ \"screen\": \"arena\" }}").expect("write snapshot");
    let err = SessionState::from_json_file(file.path()).expect_err("bad screen rejected");
    assert!(err.message.contains("Failed to parse snapshot"));
}
