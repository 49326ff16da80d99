use super::*;
use pente_core::{Coord, Session};

fn w() -> EvalWeights {
    EvalWeights::default()
}

#[test]
fn test_empty_board_is_balanced() {
    let pos = Session::new(19).unwrap().position().clone();
    assert_eq!(evaluate(&pos, &w()), 0);
}

#[test]
fn test_colour_swap_negates_score() {
    let x = Board::from_rows(&[".....", ".....", "..X..", "...X.", "....."]);
    let o = Board::from_rows(&[".....", ".....", "..O..", "...O.", "....."]);
    let none = Captures::default();
    let sx = heuristic(&x, &none, &w());
    assert!(sx > 0);
    assert_eq!(sx, -heuristic(&o, &none, &w()));
}

#[test]
fn test_single_stone_open_lines() {
    let board = Board::from_rows(&[".....", ".....", "..X..", ".....", "....."]);
    let f = features(&board, &Captures::default(), Player::One);
    assert_eq!(f.open_lines, [4, 0, 0]);
    assert_eq!(f.capture_threats, 0);
    assert_eq!(f.win_threats, 0);
}

#[test]
fn test_capture_threat_counted() {
    let board = Board::from_rows(&["XOO..", ".....", ".....", ".....", "....."]);
    let f = features(&board, &Captures::default(), Player::One);
    assert_eq!(f.capture_threats, 1);
    let g = features(&board, &Captures::default(), Player::Two);
    assert_eq!(g.capture_threats, 0);
}

#[test]
fn test_capture_raises_material() {
    let mut s = Session::new(19).unwrap();
    for (r, c) in [(5, 4), (5, 5), (12, 12), (5, 6)] {
        s.apply_move(r, c).unwrap();
    }
    let before = evaluate(s.position(), &w());
    s.apply_move(5, 7).unwrap();
    let after = evaluate(s.position(), &w());

    let f = features(s.board(), s.captures(), Player::One);
    assert_eq!(f.captured_pairs, 1);
    assert!(after > before, "capture should improve Player One: {before} -> {after}");
}

#[test]
fn test_win_threat_dominates_material() {
    let board = Board::from_rows(&[
        "........",
        ".XXXX...",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    let mut captures = Captures::default();
    for i in 0..3u8 {
        captures.push(Player::Two, [Coord::new(i, 6), Coord::new(i, 7)]);
    }
    let f = features(&board, &captures, Player::One);
    assert!(f.win_threats >= 1);
    assert!(heuristic(&board, &captures, &w()) > 0);
}

#[test]
fn test_fourth_pair_threat_is_a_win_threat() {
    let board = Board::from_rows(&["XOO..", ".....", ".....", ".....", "....."]);
    let mut captures = Captures::default();
    for i in 0..4u8 {
        captures.push(Player::One, [Coord::new(4, i), Coord::new(3, i)]);
    }
    let f = features(&board, &captures, Player::One);
    assert_eq!(f.win_threats, 1);
}

#[test]
fn test_terminal_scores() {
    assert_eq!(terminal_score(GameStatus::Won(Player::One)), Some(SCORE_INFINITY));
    assert_eq!(terminal_score(GameStatus::Won(Player::Two)), Some(-SCORE_INFINITY));
    assert_eq!(terminal_score(GameStatus::Draw), Some(0));
    assert_eq!(terminal_score(GameStatus::Ongoing), None);

    let won = Board::from_rows(&["XXXXX", ".....", ".....", ".....", "....."]);
    let pos = Position::from_board(won, Player::Two);
    assert_eq!(evaluate(&pos, &w()), SCORE_INFINITY);
}

#[test]
fn test_weights_validation() {
    assert!(w().validate().is_ok());
    let bad = EvalWeights {
        capture: -1,
        ..EvalWeights::default()
    };
    assert!(bad.validate().is_err());
}
