//! Tactical Pente Engine
//!
//! Looks one ply ahead over every empty cell and plays the most urgent one:
//! a winning move, then a block of the opponent's winning move, then a
//! capture, then a block of an opponent capture. With nothing urgent on the
//! board it plays a random empty cell.

use pente_core::{captures_at, Coord, Engine, Position, SearchResult};
use random_engine::RandomEngine;
use tracing::debug;


/// Why a cell was chosen, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tactic {
    Win,
    BlockWin,
    Capture,
    BlockCapture,
}

/// Most urgent cell for the side to move; ties go to the first cell in
/// row-major order.
pub fn find_tactical_move(pos: &Position) -> Option<(Coord, Tactic)> {
    let me = pos.to_move;
    let opponent = me.other();
    let board = &pos.board;
    let mut best: Option<(Coord, Tactic)> = None;

    for at in board.empty_cells() {
        let tactic = if pos.is_winning_move(at, me) {
            Tactic::Win
        } else if pos.is_winning_move(at, opponent) {
            Tactic::BlockWin
        } else if !captures_at(board, at, me).is_empty() {
            Tactic::Capture
        } else if !captures_at(board, at, opponent).is_empty() {
            Tactic::BlockCapture
        } else {
            continue;
        };

        if tactic == Tactic::Win {
            return Some((at, tactic));
        }
        if best.map_or(true, |(_, t)| tactic < t) {
            best = Some((at, tactic));
        }
    }
    best
}

/// Tactical one-ply engine with a random fallback.
#[derive(Debug, Clone, Default)]
pub struct TacticalEngine {
    fallback: RandomEngine,
}

impl TacticalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            fallback: RandomEngine::with_seed(seed),
        }
    }
}

impl Engine for TacticalEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        if pos.status().is_over() {
            return SearchResult::no_move(0);
        }

        match find_tactical_move(pos) {
            Some((mv, tactic)) => {
                debug!(%mv, ?tactic, "tactical move");
                SearchResult {
                    best_move: Some(mv),
                    score: 0,
                    depth: 1,
                    nodes: pos.board.empty_cells().len() as u64,
                }
            }
            None => self.fallback.search(pos),
        }
    }

    fn name(&self) -> &str {
        "Tactical v1.0"
    }

    fn new_game(&mut self) {
        self.fallback.new_game();
    }
}
