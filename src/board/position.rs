//! Immutable board positions.
//!
//! A `Position` is a complete snapshot of piece placement. It is a plain
//! fixed-size array, so it is `Copy` and every transformation returns a new
//! value; the original stays valid for sibling branches of a search.

use super::coord::{Coord, BOARD_SIZE, SQUARE_COUNT};
use super::side::{Piece, Side};

/// Errors from resolving host coordinates.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square ({0}, {1}) is off the board")]
    OffBoard(i8, i8),
}

/// Complete piece placement on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Position {
    fn default() -> Self {
        Position::empty()
    }
}

impl Position {
    /// An empty board.
    pub const fn empty() -> Self {
        Position {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// Standard starting position: full pawn rows on each side's home row.
    pub fn initial() -> Self {
        let mut pos = Position::empty();
        for side in [Side::First, Side::Second] {
            for col in 0..BOARD_SIZE {
                pos.squares[Coord::new(side.home_row(), col).index()] = Some(Piece::new(side));
            }
        }
        pos
    }

    /// Builds a position from a list of placements. Later entries overwrite earlier ones.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Coord, Side)>,
    {
        let mut pos = Position::empty();
        for (at, side) in pieces {
            pos.squares[at.index()] = Some(Piece::new(side));
        }
        pos
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.squares[at.index()]
    }

    /// Side owning the piece at `at`, if any.
    #[inline]
    pub fn side_at(&self, at: Coord) -> Option<Side> {
        self.squares[at.index()].map(|p| p.side)
    }

    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.squares[at.index()].is_none()
    }

    /// Number of pieces owned by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|sq| matches!(sq, Some(p) if p.side == side))
            .count()
    }

    /// All pieces in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, sq)| sq.map(|p| (Coord::from_index(i), p)))
    }

    /// Squares holding pieces of `side`, in row-major scan order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.side == side)
            .map(|(at, _)| at)
    }

    /// Returns a copy without the piece at `at`.
    #[must_use]
    pub fn remove(&self, at: Coord) -> Position {
        let mut next = *self;
        next.squares[at.index()] = None;
        next
    }

    /// Returns a copy with `piece` placed at `at`, replacing any occupant.
    #[must_use]
    pub fn place(&self, at: Coord, piece: Piece) -> Position {
        let mut next = *self;
        next.squares[at.index()] = Some(piece);
        next
    }

    /// Returns a copy with the piece at `from` moved to `to`.
    ///
    /// Whatever stood on `to` is overwritten; an empty `from` leaves `to` empty.
    #[must_use]
    pub fn move_piece(&self, from: Coord, to: Coord) -> Position {
        let mut next = *self;
        next.squares[to.index()] = next.squares[from.index()].take();
        next
    }

    /// Swaps the sides of every piece and reflects the rows.
    ///
    /// Evaluating the mirrored position yields the negated score.
    #[must_use]
    pub fn mirror(&self) -> Position {
        let mut next = Position::empty();
        for (at, piece) in self.pieces() {
            next.squares[at.mirror().index()] = Some(Piece::new(piece.side.opponent()));
        }
        next
    }
}

/// Resolves a signed pair to an on-board coordinate.
pub fn checked_coord(row: i8, col: i8) -> Result<Coord, BoardError> {
    Coord::try_new(row, col).ok_or(BoardError::OffBoard(row, col))
}
