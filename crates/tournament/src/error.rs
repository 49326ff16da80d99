use std::path::PathBuf;

use pente_core::PenteError;

/// Errors that can occur when loading arena configuration.
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

/// Errors from reading or writing result and rating files.
#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can stop a tournament run.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Results(#[from] ResultsError),

    #[error("game error: {0}")]
    Game(#[from] PenteError),

    #[error("{0}")]
    Usage(String),
}
