//! Client configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ConfigError;
use crate::party::CharacterClass;

/// Presentation settings for the client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Whether centralized authentication is used instead of name entry.
    #[serde(default)]
    auth_enabled: bool,

    /// Companions seeded into an empty party.
    #[serde(default = "default_party")]
    default_party: Vec<CharacterClass>,

    /// Name pre-filled for offline play.
    #[serde(default)]
    player_name: Option<String>,
}

#[instrument]
fn default_party() -> Vec<CharacterClass> {
    vec![
        CharacterClass::Warrior,
        CharacterClass::Cleric,
        CharacterClass::Mage,
    ]
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_enabled: false,
            default_party: default_party(),
            player_name: None,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            auth_enabled = config.auth_enabled,
            party = config.default_party.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns a copy with auth toggled.
    pub fn with_auth_enabled(mut self, enabled: bool) -> Self {
        self.auth_enabled = enabled;
        self
    }
}
