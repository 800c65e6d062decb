//! Board coordinates.
//!
//! The grid is a fixed 8x8 board; rows and columns both run 0..7.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A (row, column) square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

/// Returns true if the signed pair lies on the board.
#[inline]
pub const fn on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

impl Coord {
    /// Creates an on-board coordinate.
    ///
    /// Panics if either component is outside the board; callers that may
    /// walk off the edge should use [`Coord::try_new`] or [`Coord::offset`].
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "coordinate ({}, {}) is off the board",
            row,
            col
        );
        Coord { row, col }
    }

    /// Creates a coordinate from signed components, or `None` off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if on_board(row, col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the square `(dr, dc)` away, or `None` if it falls off the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Coord::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Index into a 64-entry row-major array.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Inverse of [`Coord::index`].
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < SQUARE_COUNT, "square index {} is off the board", idx);
        Coord {
            row: (idx / BOARD_SIZE as usize) as u8,
            col: (idx % BOARD_SIZE as usize) as u8,
        }
    }

    /// Reflects the row, keeping the column.
    pub const fn mirror(self) -> Self {
        Coord {
            row: BOARD_SIZE - 1 - self.row,
            col: self.col,
        }
    }
}

impl fmt::Display for Coord {
    /// Formats as file letter plus rank digit, e.g. `(1, 3)` -> `d2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
