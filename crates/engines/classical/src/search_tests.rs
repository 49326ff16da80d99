use super::*;
use pente_core::Session;

fn position_with(stones: &[(u8, u8, Player)], to_move: Player) -> Position {
    let mut board = Board::new(19).unwrap();
    for &(r, c, p) in stones {
        board.set(Coord::new(r, c), Some(p));
    }
    Position::from_board(board, to_move)
}

fn open_four_for_two() -> Position {
    use Player::*;
    position_with(
        &[
            (5, 0, One),
            (5, 1, Two),
            (5, 2, Two),
            (5, 3, Two),
            (5, 4, Two),
            (9, 9, One),
            (10, 10, One),
        ],
        One,
    )
}

#[test]
fn test_candidates_on_empty_board_is_centre() {
    let board = Board::new(19).unwrap();
    assert_eq!(candidate_moves(&board), vec![Coord::new(9, 9)]);
}

#[test]
fn test_candidates_surround_stones_in_row_major_order() {
    let mut s = Session::new(19).unwrap();
    s.apply_move(9, 9).unwrap();
    let moves = candidate_moves(s.board());
    assert_eq!(
        moves,
        vec![
            Coord::new(8, 8),
            Coord::new(8, 9),
            Coord::new(8, 10),
            Coord::new(9, 8),
            Coord::new(9, 10),
            Coord::new(10, 8),
            Coord::new(10, 9),
            Coord::new(10, 10),
        ]
    );
}

#[test]
fn test_depth_zero_scores_position_after_move() {
    let mut s = Session::new(19).unwrap();
    for (r, c) in [(9, 9), (9, 10), (10, 10)] {
        s.apply_move(r, c).unwrap();
    }
    let pos = s.position().clone();
    let mv = Coord::new(8, 8);
    let weights = EvalWeights::default();
    let config = SearchConfig::default();
    let mut ctx = SearchContext {
        config: &config,
        weights: &weights,
        nodes: 0,
    };

    let value = minimax(&pos, mv, 0, -SCORE_INFINITY, SCORE_INFINITY, &mut ctx);

    let after = pos.after(mv);
    assert_eq!(value, heuristic(&after.board, &after.captures, &weights));
    assert_ne!(value, heuristic(&pos.board, &pos.captures, &weights));
    assert_eq!(ctx.nodes, 1);
}

#[test]
fn test_takes_immediate_line_win() {
    use Player::*;
    let pos = position_with(
        &[
            (3, 3, One),
            (3, 4, One),
            (3, 5, One),
            (3, 6, One),
            (4, 4, Two),
            (4, 5, Two),
            (12, 12, Two),
        ],
        One,
    );
    for config in [SearchConfig::default(), SearchConfig::full_width(1)] {
        let outcome = pick_best_move(&pos, &config, &EvalWeights::default());
        let (mv, score) = outcome.best_move.unwrap();
        assert!(mv == Coord::new(3, 2) || mv == Coord::new(3, 7), "got {mv}");
        assert_eq!(score, SCORE_INFINITY);
    }
}

#[test]
fn test_player_two_takes_capture_win() {
    use Player::*;
    let mut pos = position_with(&[(7, 7, Two), (7, 8, One), (7, 9, One)], Two);
    for i in 0..4u8 {
        pos.captures.push(Two, [Coord::new(0, i), Coord::new(1, i)]);
    }
    let outcome = pick_best_move(&pos, &SearchConfig::default(), &EvalWeights::default());
    assert_eq!(outcome.best_move, Some((Coord::new(7, 10), -SCORE_INFINITY)));
}

#[test]
fn test_blocks_open_four() {
    let pos = open_four_for_two();
    for config in [SearchConfig::default(), SearchConfig::full_width(2)] {
        let outcome = pick_best_move(&pos, &config, &EvalWeights::default());
        let (mv, score) = outcome.best_move.unwrap();
        assert_eq!(mv, Coord::new(5, 5), "config {config:?}");
        assert!(score > -SCORE_INFINITY);
    }
}

#[test]
fn test_search_does_not_touch_input() {
    let pos = open_four_for_two();
    let before = pos.clone();
    let _ = pick_best_move(&pos, &SearchConfig::default(), &EvalWeights::default());
    assert_eq!(pos, before);
}

#[test]
fn test_search_is_deterministic() {
    let mut s = Session::new(19).unwrap();
    for (r, c) in [(9, 9), (9, 10), (10, 9), (8, 8)] {
        s.apply_move(r, c).unwrap();
    }
    let config = SearchConfig::default();
    let a = pick_best_move(s.position(), &config, &EvalWeights::default());
    let b = pick_best_move(s.position(), &config, &EvalWeights::default());
    assert_eq!(a, b);
}

#[test]
fn test_decided_position_has_no_move() {
    use Player::*;
    let pos = position_with(
        &[(0, 0, One), (0, 1, One), (0, 2, One), (0, 3, One), (0, 4, One)],
        Two,
    );
    let outcome = pick_best_move(&pos, &SearchConfig::default(), &EvalWeights::default());
    assert_eq!(outcome.best_move, None);
}

#[test]
fn test_branching_cap_limits_nodes() {
    let pos = open_four_for_two();
    let narrow = pick_best_move(&pos, &SearchConfig::default(), &EvalWeights::default());
    let wide = pick_best_move(&pos, &SearchConfig::full_width(2), &EvalWeights::default());
    assert!(narrow.nodes < wide.nodes);
}

#[test]
fn test_zero_branching_cap_still_picks_a_move() {
    let mut s = Session::new(19).unwrap();
    s.apply_move(9, 9).unwrap();
    let config = SearchConfig {
        moves_to_analyse: Some(0),
        ..SearchConfig::default()
    };
    let one = SearchConfig {
        moves_to_analyse: Some(1),
        ..SearchConfig::default()
    };

    let outcome = pick_best_move(s.position(), &config, &EvalWeights::default());
    let (mv, _) = outcome.best_move.unwrap();
    assert!(s.board().is_empty_at(mv));
    assert_eq!(outcome, pick_best_move(s.position(), &one, &EvalWeights::default()));
}
