//! Fixed-capacity board storage.
//!
//! The board is a plain `Copy` value: cloning it for a hypothetical line of
//! play never aliases the authoritative game state.

use std::fmt;

use crate::error::PenteError;
use crate::types::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; MAX_SIZE * MAX_SIZE],
    size: u8,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, PenteError> {
        if size == 0 || size > MAX_SIZE {
            return Err(PenteError::InvalidBoardSize(size));
        }
        Ok(Board {
            cells: [None; MAX_SIZE * MAX_SIZE],
            size: size as u8,
        })
    }

    /// Builds a board from text rows: `.` or `+` empty, `X`/`1` Player One,
    /// `O`/`2` Player Two. Whitespace is ignored. Used by tests and scenario
    /// setup; panics on malformed input.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Board::new(size).expect("Invalid board size in rows");
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert!(cells.len() == size, "Row {} has {} cells, expected {}", r, cells.len(), size);
            for (c, ch) in cells.into_iter().enumerate() {
                let cell = match ch {
                    '.' | '+' => None,
                    'X' | 'x' | '1' => Some(Player::One),
                    'O' | 'o' | '2' => Some(Player::Two),
                    _ => panic!("Invalid cell char in board rows: {}", ch),
                };
                board.set(Coord::new(r as u8, c as u8), cell);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    fn index(c: Coord) -> usize {
        c.row as usize * MAX_SIZE + c.col as usize
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        (c.row as usize) < self.size() && (c.col as usize) < self.size()
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[Self::index(c)]
    }

    #[inline]
    pub fn set(&mut self, c: Coord, cell: Cell) {
        self.cells[Self::index(c)] = cell;
    }

    #[inline]
    pub fn is_empty_at(&self, c: Coord) -> bool {
        self.get(c).is_none()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| Coord::new(r, c)))
    }

    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.is_empty_at(c)).collect()
    }

    pub fn first_empty(&self) -> Option<Coord> {
        self.coords().find(|&c| self.is_empty_at(c))
    }

    pub fn stone_count(&self) -> usize {
        self.coords().filter(|&c| !self.is_empty_at(c)).count()
    }

    pub fn stones_of(&self, player: Player) -> usize {
        self.coords().filter(|&c| self.get(c) == Some(player)).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    pub fn center(&self) -> Coord {
        let mid = self.size / 2;
        Coord::new(mid, mid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(f, "   ")?;
        for c in 0..size {
            write!(f, "{} ", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..size {
            write!(f, "{:>2} ", r + 1)?;
            for c in 0..size {
                let ch = match self.get(Coord::new(r as u8, c as u8)) {
                    None => '+',
                    Some(Player::One) => 'X',
                    Some(Player::Two) => 'O',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({}x{})", self.size, self.size)?;
        fmt::Display::fmt(self, f)
    }
}
