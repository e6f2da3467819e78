use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Game setup options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Which player makes the first move.
    pub starting_player: StartingPlayer,
}

/// Terminal UI options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key event per loop iteration, in milliseconds.
    pub poll_interval_ms: u64,
    /// Column the selector starts on, 0-based.
    pub initial_column: usize,
    /// Whether to render the controls help pane.
    pub show_controls: bool,
}

/// Config-file spelling of the starting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartingPlayer {
    One,
    Two,
}

impl StartingPlayer {
    pub fn to_player(self) -> Player {
        match self {
            StartingPlayer::One => Player::One,
            StartingPlayer::Two => Player::Two,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_player: StartingPlayer::One,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            initial_column: 3,
            show_controls: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if self.ui.initial_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.initial_column must be < {COLS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
