//! Heuristic evaluation of Pente positions.
//!
//! Scores are from Player One's point of view: positive favours Player One.
//! Each term is counted for both players and subtracted:
//! - captured pairs
//! - open lines of length 1..=3 (a run ending in an empty cell)
//! - capture threats (empty cells where a placement would take a pair)
//! - win threats (empty cells where a placement wins by line or captures)

use pente_core::{captures_at, repeated, Board, Captures, GameStatus, Player, Position};

use crate::config::EvalWeights;

/// Score of a decided game. Player Two wins score `-SCORE_INFINITY`.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Per-player counts feeding the heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub captured_pairs: u32,
    pub open_lines: [u32; 3],
    pub capture_threats: u32,
    pub win_threats: u32,
}

/// Counts the heuristic features of `player` on the given board.
pub fn features(board: &Board, captures: &Captures, player: Player) -> Features {
    let mut f = Features {
        captured_pairs: captures.count(player) as u32,
        ..Features::default()
    };
    let patterns: [Vec<_>; 3] = [1, 2, 3].map(|len| {
        let mut p = repeated(Some(player), len);
        p.push(None);
        p
    });

    for at in board.coords().filter(|&c| board.is_empty_at(c)) {
        for (i, pattern) in patterns.iter().enumerate() {
            if pente_core::matches_pattern(board, at, pattern) {
                f.open_lines[i] += 1;
            }
        }
        let taken = captures_at(board, at, player).len();
        f.capture_threats += taken as u32;
        if pente_core::completes_five(board, at, player)
            || captures.count(player) + taken >= pente_core::CAPTURES_TO_WIN
        {
            f.win_threats += 1;
        }
    }
    f
}

fn weigh(f: &Features, w: &EvalWeights) -> i64 {
    let mut score = w.capture as i64 * f.captured_pairs as i64;
    for (count, weight) in f.open_lines.iter().zip(w.lines) {
        score += *count as i64 * weight as i64;
    }
    score += w.capture_threat as i64 * f.capture_threats as i64;
    score += w.win_threat as i64 * f.win_threats as i64;
    score
}

/// Heuristic score of a position that is still in play.
pub fn heuristic(board: &Board, captures: &Captures, w: &EvalWeights) -> i32 {
    let one = weigh(&features(board, captures, Player::One), w);
    let two = weigh(&features(board, captures, Player::Two), w);
    let limit = SCORE_INFINITY as i64 - 1;
    (one - two).clamp(-limit, limit) as i32
}

/// Score of a decided game.
pub fn terminal_score(status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Won(Player::One) => Some(SCORE_INFINITY),
        GameStatus::Won(Player::Two) => Some(-SCORE_INFINITY),
        GameStatus::Draw => Some(0),
    }
}

/// Evaluates a position: infinite for decided games, heuristic otherwise.
pub fn evaluate(pos: &Position, w: &EvalWeights) -> i32 {
    terminal_score(pos.status()).unwrap_or_else(|| heuristic(&pos.board, &pos.captures, w))
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
