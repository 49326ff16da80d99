//! Game session: the authoritative position plus status and a reversible
//! move history.
//!
//! Undo relies on captures being append-only per move. Each history entry
//! stores the capture record as it stood *after* that move, so the pairs taken
//! by the undone move are exactly those beyond the length recorded in the
//! entry below it (or zero when the stack becomes empty). Popping back to that
//! length, and restoring each popped pair to the opponent's colour, rebuilds
//! the pre-move board.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::error::PenteError;
use crate::notation::move_notation;
use crate::position::{Captures, Position};
use crate::types::*;

/// One applied move and the capture record right after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub captures: Captures,
    pub at: Coord,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveStack {
    entries: Vec<HistoryEntry>,
}

impl MoveStack {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, captures: Captures, at: Coord) {
        self.entries.push(HistoryEntry { captures, at });
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

/// Persistable form of a session. Captures and status are re-derived by
/// replaying the moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: usize,
    pub moves: Vec<Coord>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    position: Position,
    status: GameStatus,
    history: MoveStack,
}

impl Session {
    pub fn new(size: usize) -> Result<Self, PenteError> {
        Ok(Session {
            position: Position::new(size)?,
            status: GameStatus::Ongoing,
            history: MoveStack::default(),
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn captures(&self) -> &Captures {
        &self.position.captures
    }

    pub fn to_move(&self) -> Player {
        self.position.to_move
    }

    pub fn winner(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &MoveStack {
        &self.history
    }

    pub fn moves(&self) -> impl Iterator<Item = Coord> + '_ {
        self.history.iter().map(|e| e.at)
    }

    /// Checks a target cell without changing anything.
    pub fn validate_move(&self, row: i32, col: i32) -> Result<Coord, PenteError> {
        if self.status.is_over() {
            return Err(PenteError::GameOver);
        }
        self.position.validate_move(row, col)
    }

    /// Places the side to move's stone, resolves captures, flips the turn,
    /// recomputes the status and records the move.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<GameStatus, PenteError> {
        let at = self.validate_move(row, col)?;
        let mover = self.position.to_move;
        let taken = self.position.play(at);
        self.status = self.position.status();
        self.history.push(self.position.captures.clone(), at);
        trace!(%at, ?mover, taken, status = ?self.status, "applied move");
        Ok(self.status)
    }

    pub fn play(&mut self, at: Coord) -> Result<GameStatus, PenteError> {
        self.apply_move(at.row as i32, at.col as i32)
    }

    /// Reverses the most recent move, including any pairs it captured.
    pub fn undo_move(&mut self) -> Result<Coord, PenteError> {
        let entry = self.history.pop().ok_or(PenteError::EmptyHistory)?;

        let mover = self.position.to_move.other();
        let target = self
            .history
            .peek()
            .map(|prev| prev.captures.count(mover))
            .unwrap_or(0);
        self.position.to_move = mover;

        while self.position.captures.count(mover) > target {
            if let Some(pair) = self.position.captures.pop(mover) {
                for c in pair {
                    self.position.board.set(c, Some(mover.other()));
                }
            }
        }
        self.position.board.set(entry.at, None);
        self.status = GameStatus::Ongoing;
        trace!(at = %entry.at, ?mover, "undid move");
        Ok(entry.at)
    }

    /// Every move so far in relative-to-centre notation.
    pub fn move_log(&self) -> Vec<String> {
        let size = self.position.board.size();
        let mut prev_total = 0;
        self.history
            .iter()
            .map(|entry| {
                let total = entry.captures.total();
                let captured = total > prev_total;
                prev_total = total;
                move_notation(entry.at, size, captured)
            })
            .collect()
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            size: self.position.board.size(),
            moves: self.moves().collect(),
        }
    }

    /// Replays a record through the rules.
    pub fn from_record(record: &GameRecord) -> Result<Self, PenteError> {
        let mut session = Session::new(record.size)?;
        for &at in &record.moves {
            session.play(at)?;
        }
        Ok(session)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
