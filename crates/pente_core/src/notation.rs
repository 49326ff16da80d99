//! Relative-to-centre move notation used for exported move logs.
//!
//! A move is written as its horizontal offset from the centre (`R3`, `L2`)
//! followed by its vertical offset (`D1`, `U4`). The centre itself is `0`.
//! A trailing `*` marks a move that captured.

use crate::error::NotationError;
use crate::types::*;

pub fn move_notation(at: Coord, size: usize, captured: bool) -> String {
    let centre = (size / 2) as i32;
    let dy = at.row as i32 - centre;
    let dx = at.col as i32 - centre;

    let mut s = String::new();
    if dx == 0 && dy == 0 {
        s.push('0');
    } else {
        if dx > 0 {
            s.push_str(&format!("R{dx}"));
        } else if dx < 0 {
            s.push_str(&format!("L{}", -dx));
        }
        if dy > 0 {
            s.push_str(&format!("D{dy}"));
        } else if dy < 0 {
            s.push_str(&format!("U{}", -dy));
        }
    }
    if captured {
        s.push('*');
    }
    s
}

/// Inverse of [`move_notation`]: returns the coordinate and the capture flag.
pub fn parse_notation(token: &str, size: usize) -> Result<(Coord, bool), NotationError> {
    let token = token.trim();
    let malformed = || NotationError::Malformed(token.to_string());

    let (body, captured) = match token.strip_suffix('*') {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    let centre = (size / 2) as i32;
    let (mut dx, mut dy) = (0i32, 0i32);

    if body != "0" {
        let mut rest = body;
        if let Some(first) = rest.chars().next() {
            if matches!(first, 'R' | 'L') {
                let (n, tail) = take_count(&rest[1..]).ok_or_else(malformed)?;
                dx = if first == 'R' { n } else { -n };
                rest = tail;
            }
        }
        if let Some(first) = rest.chars().next() {
            if matches!(first, 'D' | 'U') {
                let (n, tail) = take_count(&rest[1..]).ok_or_else(malformed)?;
                dy = if first == 'D' { n } else { -n };
                rest = tail;
            }
        }
        if !rest.is_empty() || (dx == 0 && dy == 0) {
            return Err(malformed());
        }
    }

    let (row, col) = (centre + dy, centre + dx);
    if !is_on_board(row, col, size) {
        return Err(NotationError::OffBoard(token.to_string()));
    }
    Ok((Coord::new(row as u8, col as u8), captured))
}

/// Leading positive decimal count and the remaining input.
fn take_count(s: &str) -> Option<(i32, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let n: i32 = s[..end].parse().ok()?;
    (n > 0).then_some((n, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_zero() {
        assert_eq!(move_notation(Coord::new(9, 9), 19, false), "0");
        assert_eq!(move_notation(Coord::new(9, 9), 19, true), "0*");
    }

    #[test]
    fn test_horizontal_then_vertical() {
        assert_eq!(move_notation(Coord::new(7, 12), 19, false), "R3U2");
        assert_eq!(move_notation(Coord::new(10, 9), 19, false), "D1");
        assert_eq!(move_notation(Coord::new(9, 0), 19, true), "L9*");
    }

    #[test]
    fn test_parse_inverts_notation() {
        for (at, captured) in [
            (Coord::new(0, 0), false),
            (Coord::new(18, 3), true),
            (Coord::new(9, 9), true),
            (Coord::new(4, 9), false),
        ] {
            let token = move_notation(at, 19, captured);
            assert_eq!(parse_notation(&token, 19), Ok((at, captured)), "token {token}");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_notation("", 19), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_notation("U2R3", 19), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_notation("R0", 19), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_notation("Q1", 19), Err(NotationError::Malformed(_))));
        assert!(matches!(parse_notation("R10", 19), Err(NotationError::OffBoard(_))));
    }
}
