use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotationError;

/// Largest supported board edge. Boards are stored in a fixed-capacity array.
pub const MAX_SIZE: usize = 19;
pub const DEFAULT_SIZE: usize = 19;

/// Captured pairs needed to win outright.
pub const CAPTURES_TO_WIN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Contents of a single intersection.
pub type Cell = Option<Player>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Steps `steps` times along `(dr, dc)`, returning `None` when the result
    /// leaves a board of the given size.
    pub fn offset(self, dr: i8, dc: i8, steps: i8, size: usize) -> Option<Coord> {
        let r = self.row as i32 + dr as i32 * steps as i32;
        let c = self.col as i32 + dc as i32 * steps as i32;
        if is_on_board(r, c, size) {
            Some(Coord::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

/// Bounds check on signed coordinates.
pub fn is_on_board(row: i32, col: i32, size: usize) -> bool {
    let size = size as i32;
    (0..size).contains(&row) && (0..size).contains(&col)
}

/// Terminal label: 1-based row then column letter, e.g. `1A` or `10J`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col) as char;
        write!(f, "{}{}", self.row as u32 + 1, col)
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || NotationError::BadLabel(s.to_string());
        let col_ch = s.chars().last().ok_or_else(bad)?;
        if !col_ch.is_ascii_alphabetic() {
            return Err(bad());
        }
        let row: u32 = s[..s.len() - 1].parse().map_err(|_| bad())?;
        if row == 0 || row as usize > MAX_SIZE {
            return Err(bad());
        }
        let col = col_ch.to_ascii_uppercase() as u8 - b'A';
        if col as usize >= MAX_SIZE {
            return Err(bad());
        }
        Ok(Coord::new((row - 1) as u8, col))
    }
}
