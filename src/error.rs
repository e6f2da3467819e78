use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// The game core itself has no error type: a non-actionable move request
/// (full column, out-of-range column, game already over) is ignored and
/// reported as [`MoveOutcome::Ignored`](crate::game::MoveOutcome::Ignored)
/// rather than failing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
