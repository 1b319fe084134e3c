use std::collections::BTreeSet;
use std::fmt;

use crate::constants::{BLACK_CHAR, EMPTY_CHAR, WHITE_CHAR};
use crate::position::{in_board, Position};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color. `c.opposite().opposite() == c`.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// One side of the game: a color and the points its stones occupy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    color: Color,
    stones: BTreeSet<Position>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            stones: BTreeSet::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn has_stone(&self, pos: Position) -> bool {
        self.stones.contains(&pos)
    }

    pub fn stones(&self) -> impl Iterator<Item = Position> + '_ {
        self.stones.iter().copied()
    }

    pub fn stone_count(&self) -> usize {
        self.stones.len()
    }

    pub(crate) fn add_stone(&mut self, pos: Position) {
        self.stones.insert(pos);
    }

    pub(crate) fn remove_stone(&mut self, pos: Position) -> bool {
        self.stones.remove(&pos)
    }
}

/// Both players' stones on an NxN grid.
///
/// Invariant: every stored stone is in-board and no point is held by both
/// players. Only the crate mutates a board, through [`Game`](crate::game::Game).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    black: Player,
    white: Player,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            black: Player::new(Color::Black),
            white: Player::new(Color::White),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    pub(crate) fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Color of the stone at `pos`, or `None` if the point is empty or off-board.
    pub fn find_stone(&self, pos: Position) -> Option<Color> {
        if self.black.has_stone(pos) {
            Some(Color::Black)
        } else if self.white.has_stone(pos) {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.find_stone(pos).is_none()
    }

    pub fn in_board(&self, pos: Position) -> bool {
        in_board(pos, self.size)
    }

    /// Row-major NxN grid; `grid[i][j]` is the point `(i + 1, j + 1)`.
    pub fn snapshot(&self) -> Vec<Vec<Option<Color>>> {
        (1..=self.size as i32)
            .map(|row| {
                (1..=self.size as i32)
                    .map(|col| self.find_stone(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }

    /// Every empty in-board point, row-major.
    pub fn empty_points(&self) -> Vec<Position> {
        let n = self.size as i32;
        (1..=n)
            .flat_map(|row| (1..=n).map(move |col| Position::new(row, col)))
            .filter(|&p| self.is_empty_at(p))
            .collect()
    }

    pub(crate) fn place(&mut self, pos: Position, color: Color) {
        self.player_mut(color).add_stone(pos);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.snapshot() {
            for cell in row {
                let ch = match cell {
                    Some(Color::Black) => BLACK_CHAR,
                    Some(Color::White) => WHITE_CHAR,
                    None => EMPTY_CHAR,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
