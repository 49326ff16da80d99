//! Direction-vector scanning primitives shared by the rules and the engines.

use crate::board::Board;
use crate::types::*;

/// A unit step `(d_row, d_col)`.
pub type Direction = (i8, i8);

/// All eight neighbours, in the order captures are discovered.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

/// E, SE, S, SW. Each opposite direction is covered by scanning from the
/// other end of the line.
pub const LINE_DIRECTIONS: [Direction; 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

/// Keeps the directions whose endpoint `reach` steps away from `(row, col)`
/// is still on the board.
pub fn valid_directions<'a>(
    directions: &'a [Direction],
    reach: usize,
    row: i32,
    col: i32,
    size: usize,
) -> impl Iterator<Item = Direction> + 'a {
    let reach = reach as i32;
    directions.iter().copied().filter(move |&(dr, dc)| {
        is_on_board(row + dr as i32 * reach, col + dc as i32 * reach, size)
    })
}

/// True if the `pattern.len()` cells starting one step from `origin` along
/// `dir` equal `pattern`. Off-board reads never match.
pub fn matches_in_direction(board: &Board, origin: Coord, dir: Direction, pattern: &[Cell]) -> bool {
    pattern.iter().enumerate().all(|(i, &want)| {
        match origin.offset(dir.0, dir.1, i as i8 + 1, board.size()) {
            Some(c) => board.get(c) == want,
            None => false,
        }
    })
}

/// Checks `pattern` against the four line directions from `origin`.
pub fn matches_pattern(board: &Board, origin: Coord, pattern: &[Cell]) -> bool {
    count_pattern(board, origin, pattern) > 0
}

/// Number of line directions from `origin` in which `pattern` occurs.
pub fn count_pattern(board: &Board, origin: Coord, pattern: &[Cell]) -> usize {
    valid_directions(
        &LINE_DIRECTIONS,
        pattern.len(),
        origin.row as i32,
        origin.col as i32,
        board.size(),
    )
    .filter(|&dir| matches_in_direction(board, origin, dir, pattern))
    .count()
}

/// `[cell; n]` as a pattern vector.
pub fn repeated(cell: Cell, n: usize) -> Vec<Cell> {
    vec![cell; n]
}
