pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod pattern;
pub mod position;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use notation::*;
pub use pattern::*;
pub use position::*;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every computer opponent
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move (None only if the position is over or the board is full)
    pub best_move: Option<Coord>,
    /// Evaluation score, positive favours Player One
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position with nothing left to play.
    pub fn no_move(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Trait that all Pente engines implement.
///
/// Engines receive a snapshot of the position and must not assume they may
/// mutate shared game state. A host that wants to search in the background
/// clones the session first.
pub trait Engine: Send {
    /// Choose a move for the side to move in `pos`.
    fn search(&mut self, pos: &Position) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
