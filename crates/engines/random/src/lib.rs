//! Random Move Pente Engine
//!
//! A simple engine that selects uniformly at random among all empty cells.
//! Useful for:
//! - The easiest difficulty tier
//! - Baseline comparisons (any real engine should easily beat this)
//! - Fallback for the tactical engine when nothing urgent is on the board

use pente_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;


/// A Pente engine that plays random empty cells.
///
/// This engine provides no evaluation - it simply picks a random cell
/// from all available ones.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        if pos.status().is_over() {
            return SearchResult::no_move(0);
        }

        let empties = pos.board.empty_cells();
        self.nodes = empties.len() as u64;
        let best_move = empties.choose(&mut self.rng).copied();
        debug!(?best_move, candidates = empties.len(), "random move");

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
