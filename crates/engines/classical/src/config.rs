//! Tuning knobs for the evaluation and the search.
//!
//! The weights are starting points, not contracts: they can be overridden
//! from a TOML table.

use serde::{Deserialize, Serialize};

/// Upper bound on any single weight. Bounds each term; the total is summed
/// in `i64` and clamped by the heuristic.
pub const MAX_WEIGHT: i32 = 1_000_000;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid engine configuration: {0}")]
pub struct ConfigError(pub String);

/// Weights of the evaluation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per captured pair.
    pub capture: i32,
    /// Open lines of length 1, 2 and 3.
    pub lines: [i32; 3],
    /// Per pending capture (a placement that would take a pair).
    pub capture_threat: i32,
    /// Per placement that would win outright.
    pub win_threat: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            capture: 300,
            lines: [10, 20, 50],
            capture_threat: 200,
            win_threat: 100_000,
        }
    }
}

impl EvalWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("capture", self.capture),
            ("lines[0]", self.lines[0]),
            ("lines[1]", self.lines[1]),
            ("lines[2]", self.lines[2]),
            ("capture_threat", self.capture_threat),
            ("win_threat", self.win_threat),
        ];
        for (name, value) in all {
            if !(0..=MAX_WEIGHT).contains(&value) {
                return Err(ConfigError(format!(
                    "weight {name} must be in 0..={MAX_WEIGHT}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Depth and width limits for the minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root (at least 1).
    pub depth: u8,
    /// Branching cap per node; `None` searches every candidate.
    pub moves_to_analyse: Option<usize>,
    /// Pre-sort children by a one-ply evaluation before applying the cap.
    pub order_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            moves_to_analyse: Some(3),
            order_moves: true,
        }
    }
}

impl SearchConfig {
    pub fn full_width(depth: u8) -> Self {
        Self {
            depth,
            moves_to_analyse: None,
            order_moves: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > 6 {
            return Err(ConfigError(format!(
                "search depth must be in 1..=6, got {}",
                self.depth
            )));
        }
        if self.moves_to_analyse == Some(0) {
            return Err(ConfigError("moves_to_analyse must be > 0".into()));
        }
        Ok(())
    }
}
