//! Minimax search with alpha-beta pruning
//!
//! Player One maximises, Player Two minimises. Every node receives its
//! parent's position and the move leading to it, applies that move to a
//! copy, and only then tests for a decided game or the depth limit. A leaf
//! is therefore always scored *after* its move. The root has no move of its
//! own and reports the move of its best child.

use pente_core::{Board, Coord, Player, Position};
use tracing::{debug, trace};

use crate::config::{EvalWeights, SearchConfig};
use crate::eval::{evaluate, heuristic, terminal_score, SCORE_INFINITY};

/// Result from pick_best_move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move and its minimax value (None if the position is decided)
    pub best_move: Option<(Coord, i32)>,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// Limits and weights shared by one search invocation.
pub(crate) struct SearchContext<'a> {
    pub config: &'a SearchConfig,
    pub weights: &'a EvalWeights,
    pub nodes: u64,
}

/// Empty cells touching at least one stone, row-major. On an empty board the
/// single candidate is the centre (or the first empty cell if that is taken).
pub fn candidate_moves(board: &Board) -> Vec<Coord> {
    let size = board.size();
    let near: Vec<Coord> = board
        .coords()
        .filter(|&c| board.is_empty_at(c))
        .filter(|&c| {
            pente_core::ALL_DIRECTIONS.iter().any(|&(dr, dc)| {
                c.offset(dr, dc, 1, size)
                    .map(|n| !board.is_empty_at(n))
                    .unwrap_or(false)
            })
        })
        .collect();
    if !near.is_empty() {
        return near;
    }

    let centre = board.center();
    if board.is_empty_at(centre) {
        vec![centre]
    } else {
        board.first_empty().into_iter().collect()
    }
}

/// Candidates for the side to move, best-first when ordering is enabled and
/// cut to the branching cap.
fn ordered_candidates(pos: &Position, ctx: &SearchContext) -> Vec<Coord> {
    let mut moves = candidate_moves(&pos.board);

    if ctx.config.order_moves && moves.len() > 1 {
        let mut scored: Vec<(i32, Coord)> = moves
            .iter()
            .map(|&mv| (evaluate(&pos.after(mv), ctx.weights), mv))
            .collect();
        // Stable sort keeps row-major order among equal scores.
        if pos.to_move == Player::One {
            scored.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            scored.sort_by(|a, b| a.0.cmp(&b.0));
        }
        moves = scored.into_iter().map(|(_, mv)| mv).collect();
    }

    // A zero cap still explores one child.
    if let Some(cap) = ctx.config.moves_to_analyse {
        moves.truncate(cap.max(1));
    }
    moves
}

/// Searches the position and returns the best move with its minimax value.
pub fn pick_best_move(pos: &Position, config: &SearchConfig, weights: &EvalWeights) -> SearchOutcome {
    if pos.status().is_over() {
        return SearchOutcome {
            best_move: None,
            nodes: 0,
        };
    }

    let mut ctx = SearchContext {
        config,
        weights,
        nodes: 0,
    };
    let depth = config.depth.max(1);
    let (score, best) = expand(pos, depth, -SCORE_INFINITY, SCORE_INFINITY, &mut ctx);

    debug!(
        depth,
        nodes = ctx.nodes,
        score,
        best = ?best,
        "search finished"
    );

    SearchOutcome {
        best_move: best.map(|mv| (mv, score)),
        nodes: ctx.nodes,
    }
}

/// Value of the node reached by playing `mv` in `parent`.
pub(crate) fn minimax(
    parent: &Position,
    mv: Coord,
    depth: u8,
    alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    let pos = parent.after(mv);
    ctx.nodes += 1;

    if let Some(score) = terminal_score(pos.status()) {
        return score;
    }
    if depth == 0 {
        return heuristic(&pos.board, &pos.captures, ctx.weights);
    }
    expand(&pos, depth, alpha, beta, ctx).0
}

/// Folds the children of an undecided position. Returns the best value and
/// the child move that produced it.
fn expand(
    pos: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> (i32, Option<Coord>) {
    let moves = ordered_candidates(pos, ctx);
    assert!(
        !moves.is_empty(),
        "no candidate moves in an undecided position"
    );

    let maximizing = pos.to_move == Player::One;
    let mut best: Option<(i32, Coord)> = None;

    for mv in moves {
        let value = minimax(pos, mv, depth - 1, alpha, beta, ctx);
        trace!(%mv, value, depth, "child value");

        let improves = match best {
            None => true,
            Some((b, _)) if maximizing => value > b,
            Some((b, _)) => value < b,
        };
        if improves {
            best = Some((value, mv));
        }

        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if alpha >= beta {
            break; // cutoff
        }
    }

    match best {
        Some((value, mv)) => (value, Some(mv)),
        None => (0, None),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
