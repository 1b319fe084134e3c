//! Board coordinates.
//!
//! A [`Position`] is a plain `(row, col)` value, 1-indexed, with row 1 at the
//! top of the board. Neighbor functions never check bounds: they happily
//! produce `(0, c)` or `(N + 1, c)`, and callers filter with [`in_board`].

use std::fmt;

/// A point on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on an `size`x`size` board.
    pub fn in_board(self, size: usize) -> bool {
        in_board(self, size)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// `1 <= row <= size` and `1 <= col <= size`.
#[inline]
pub fn in_board(pos: Position, size: usize) -> bool {
    let n = size as i64;
    (1..=n).contains(&(pos.row as i64)) && (1..=n).contains(&(pos.col as i64))
}

#[inline]
pub fn up(pos: Position) -> Position {
    Position::new(pos.row - 1, pos.col)
}

#[inline]
pub fn down(pos: Position) -> Position {
    Position::new(pos.row + 1, pos.col)
}

#[inline]
pub fn left(pos: Position) -> Position {
    Position::new(pos.row, pos.col - 1)
}

#[inline]
pub fn right(pos: Position) -> Position {
    Position::new(pos.row, pos.col + 1)
}

/// The 4 orthogonal neighbors (up, down, left, right), unfiltered.
#[inline]
pub fn neighbors(pos: Position) -> [Position; 4] {
    [up(pos), down(pos), left(pos), right(pos)]
}

/// Parse a GTP vertex (e.g. "D4") into a Position for a board of `size`.
///
/// Columns use letters A-Z skipping I; rows count from the bottom edge.
/// The result is not bounds-checked, so "J12" on a 9x9 board yields an
/// off-board position. Returns `None` for malformed input (including "pass").
pub fn parse_coord(s: &str, size: usize) -> Option<Position> {
    let bytes = s.trim().as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let col_char = bytes[0].to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == b'I' {
        return None;
    }
    let mut col = (col_char - b'A' + 1) as i32;
    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if col_char > b'I' {
        col -= 1;
    }

    let digits = &bytes[1..];
    if digits.len() > 3 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let gtp_row = digits
        .iter()
        .fold(0i32, |acc, &b| acc * 10 + (b - b'0') as i32);

    Some(Position::new(size as i32 - gtp_row + 1, col))
}

/// Convert an in-board Position to a GTP vertex string (e.g. "D4").
pub fn str_coord(pos: Position, size: usize) -> String {
    // Convert column to letter, skipping 'I'
    let mut c = (b'@' + pos.col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    format!("{c}{}", size as i32 + 1 - pos.row)
}
