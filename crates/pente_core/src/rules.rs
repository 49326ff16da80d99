//! Pair captures and win detection.
//!
//! Capture pattern: `X O O X` along any of the eight directions, where the
//! first `X` is the stone just placed. Only exactly two stones are taken.

use crate::board::Board;
use crate::pattern::{matches_in_direction, matches_pattern, repeated, valid_directions, ALL_DIRECTIONS, LINE_DIRECTIONS};
use crate::position::Captures;
use crate::types::*;

/// Two opponent stones removed by one flank.
pub type CapturedPair = [Coord; 2];

/// Pairs a stone of `player` placed at `at` would capture, without touching the board.
pub fn captures_at(board: &Board, at: Coord, player: Player) -> Vec<CapturedPair> {
    let opponent = player.other();
    let pattern = [Some(opponent), Some(opponent), Some(player)];
    valid_directions(&ALL_DIRECTIONS, 3, at.row as i32, at.col as i32, board.size())
        .filter(|&dir| matches_in_direction(board, at, dir, &pattern))
        .filter_map(|(dr, dc)| {
            let first = at.offset(dr, dc, 1, board.size())?;
            let second = at.offset(dr, dc, 2, board.size())?;
            Some([first, second])
        })
        .collect()
}

/// Places `player` at `at`, removes every flanked pair and returns them in
/// discovery order. The caller guarantees the cell is on the board and empty.
pub fn place_stone(board: &mut Board, at: Coord, player: Player) -> Vec<CapturedPair> {
    board.set(at, Some(player));
    let pairs = captures_at(board, at, player);
    for pair in &pairs {
        for &c in pair {
            board.set(c, None);
        }
    }
    pairs
}

/// First player (row-major scan) holding five in a row, if any.
pub fn line_winner(board: &Board) -> Option<Player> {
    board.coords().find_map(|c| {
        let player = board.get(c)?;
        matches_pattern(board, c, &repeated(Some(player), 4)).then_some(player)
    })
}

/// Whether a stone of `player` at `at` would be part of five or more in a row.
pub fn completes_five(board: &Board, at: Coord, player: Player) -> bool {
    LINE_DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = |sign: i8| {
            (1..5)
                .take_while(|&step| {
                    at.offset(dr * sign, dc * sign, step, board.size())
                        .map(|c| board.get(c) == Some(player))
                        .unwrap_or(false)
                })
                .count()
        };
        1 + run(1) + run(-1) >= 5
    })
}

/// Whether a placement at `at` wins immediately, by line or by reaching the
/// capture threshold.
pub fn is_winning_move(board: &Board, captures: &Captures, at: Coord, player: Player) -> bool {
    completes_five(board, at, player)
        || captures.count(player) + captures_at(board, at, player).len() >= CAPTURES_TO_WIN
}

/// Game status of a board and capture record. Capture wins are checked
/// first, then lines, then a full board.
pub fn status(board: &Board, captures: &Captures) -> GameStatus {
    for player in Player::ALL {
        if captures.count(player) >= CAPTURES_TO_WIN {
            return GameStatus::Won(player);
        }
    }
    if let Some(player) = line_winner(board) {
        return GameStatus::Won(player);
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
