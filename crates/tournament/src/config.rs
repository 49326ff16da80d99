use std::path::Path;

use pente_ai::AiConfig;
use pente_core::{DEFAULT_SIZE, MAX_SIZE};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Arena settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub board_size: usize,
    /// Games per match
    pub num_games: u32,
    /// Moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether the engines swap colours every game
    pub alternate_colors: bool,
    /// Random stones placed before the engines take over
    pub opening_moves: u32,
    /// Seeds both the openings and the random tiers
    pub seed: Option<u64>,
    pub ai: AiConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_SIZE,
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            opening_moves: 0,
            seed: None,
            ai: AiConfig::default(),
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: ArenaConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in 1..={MAX_SIZE}"
            )));
        }
        if self.num_games == 0 {
            return Err(ConfigError::Validation("num_games must be > 0".into()));
        }
        if self.max_moves == 0 {
            return Err(ConfigError::Validation("max_moves must be > 0".into()));
        }
        if self.opening_moves >= self.max_moves {
            return Err(ConfigError::Validation(
                "opening_moves must be < max_moves".into(),
            ));
        }
        self.ai
            .validate()
            .map_err(|e| ConfigError::Validation(format!("ai: {e}")))
    }
}
