use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::PenteError;
use crate::rules::{self, CapturedPair};
use crate::types::*;

/// Captured pairs per player, in the order they were taken.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captures {
    pairs: [Vec<CapturedPair>; 2],
}

impl Captures {
    pub fn count(&self, player: Player) -> usize {
        self.pairs[player.idx()].len()
    }

    pub fn total(&self) -> usize {
        self.pairs[0].len() + self.pairs[1].len()
    }

    pub fn pairs(&self, player: Player) -> &[CapturedPair] {
        &self.pairs[player.idx()]
    }

    pub fn push(&mut self, player: Player, pair: CapturedPair) {
        self.pairs[player.idx()].push(pair);
    }

    pub fn pop(&mut self, player: Player) -> Option<CapturedPair> {
        self.pairs[player.idx()].pop()
    }
}

/// Board, captures and side to move: everything a hypothetical line of play
/// needs. Engines branch on copies of this and never on the session itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub captures: Captures,
    pub to_move: Player,
}

impl Position {
    pub fn new(size: usize) -> Result<Self, PenteError> {
        Ok(Position {
            board: Board::new(size)?,
            captures: Captures::default(),
            to_move: Player::One,
        })
    }

    pub fn from_board(board: Board, to_move: Player) -> Self {
        Position {
            board,
            captures: Captures::default(),
            to_move,
        }
    }

    /// Rejects off-board and occupied targets.
    pub fn validate_move(&self, row: i32, col: i32) -> Result<Coord, PenteError> {
        if !is_on_board(row, col, self.board.size()) {
            return Err(PenteError::InvalidMove {
                row,
                col,
                reason: crate::error::InvalidReason::OffBoard,
            });
        }
        let at = Coord::new(row as u8, col as u8);
        if !self.board.is_empty_at(at) {
            return Err(PenteError::InvalidMove {
                row,
                col,
                reason: crate::error::InvalidReason::Occupied,
            });
        }
        Ok(at)
    }

    /// Plays `at` for the side to move in place and returns the pairs it took.
    /// `at` must already be validated.
    pub fn play(&mut self, at: Coord) -> usize {
        let mover = self.to_move;
        let pairs = rules::place_stone(&mut self.board, at, mover);
        let taken = pairs.len();
        for pair in pairs {
            self.captures.push(mover, pair);
        }
        self.to_move = mover.other();
        taken
    }

    /// Successor position after the side to move plays `at`.
    pub fn after(&self, at: Coord) -> Position {
        let mut next = self.clone();
        next.play(at);
        next
    }

    pub fn status(&self) -> GameStatus {
        rules::status(&self.board, &self.captures)
    }

    /// Whether `player` placing at `at` would win on the spot.
    pub fn is_winning_move(&self, at: Coord, player: Player) -> bool {
        rules::is_winning_move(&self.board, &self.captures, at, player)
    }
}
