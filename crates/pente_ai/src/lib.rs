//! Computer opponent for Pente
//!
//! Maps a difficulty tier to one of three engines and exposes
//! [`suggest_move`], the single entry point front-ends call:
//!
//! - `Random`: any empty cell
//! - `Tactical`: one-ply win / block / capture heuristic
//! - `Minimax`: bounded alpha-beta search
//!
//! Suggestions are computed on a snapshot of the session and never modify
//! it, so a host may run them on a cloned session in a worker thread.

use std::fmt;
use std::str::FromStr;

use classical_engine::{ClassicalEngine, ConfigError, EvalWeights, SearchConfig};
use pente_core::{Coord, Engine, PenteError, Session};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use tactical_engine::TacticalEngine;
use tracing::debug;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Random,
    Tactical,
    Minimax,
}

/// Why no suggestion could be made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error(transparent)]
    Rules(#[from] PenteError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected random, tactical or minimax)")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Random, Difficulty::Tactical, Difficulty::Minimax];

    /// 1-based tier number.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Tactical => 2,
            Difficulty::Minimax => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.level() == level)
    }

    /// Builds the engine for this tier.
    pub fn engine(self, config: &AiConfig) -> Box<dyn Engine> {
        match (self, config.seed) {
            (Difficulty::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (Difficulty::Random, None) => Box::new(RandomEngine::new()),
            (Difficulty::Tactical, Some(seed)) => Box::new(TacticalEngine::with_seed(seed)),
            (Difficulty::Tactical, None) => Box::new(TacticalEngine::new()),
            (Difficulty::Minimax, _) => {
                Box::new(ClassicalEngine::with_config(config.search, config.weights))
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::Tactical => "tactical",
            Difficulty::Minimax => "minimax",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" | "easy" | "1" => Ok(Difficulty::Random),
            "tactical" | "medium" | "2" => Ok(Difficulty::Tactical),
            "minimax" | "hard" | "3" => Ok(Difficulty::Minimax),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Settings for the computer opponent. Only the minimax tier reads the
/// search limits and weights; the seed makes the random tiers reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub search: SearchConfig,
    pub weights: EvalWeights,
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        self.weights.validate()
    }
}

/// Suggests a move for the side to move with default settings.
pub fn suggest_move(session: &Session, difficulty: Difficulty) -> Result<Coord, AiError> {
    suggest_move_with(session, difficulty, &AiConfig::default())
}

/// Suggests a move for the side to move. Fails with `GameOver` once the
/// game is decided and with a config error before any search runs.
pub fn suggest_move_with(
    session: &Session,
    difficulty: Difficulty,
    config: &AiConfig,
) -> Result<Coord, AiError> {
    if session.winner().is_over() {
        return Err(PenteError::GameOver.into());
    }
    config.validate()?;

    let mut engine = difficulty.engine(config);
    let result = engine.search(session.position());
    debug!(
        engine = engine.name(),
        %difficulty,
        best = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        "suggested move"
    );
    Ok(result.best_move.ok_or(PenteError::GameOver)?)
}
