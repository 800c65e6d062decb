//! Board representation.
//!
//! Contains the sides, coordinates, immutable positions, moves with their
//! apply/undo adapter, and the append-only move history.

pub mod coord;
pub mod history;
pub mod moves;
pub mod position;
pub mod side;

pub use coord::{on_board, Coord, BOARD_SIZE, SQUARE_COUNT};
pub use history::{History, HistoryEntry};
pub use moves::{apply_move, undo_move, Applied, Move};
pub use position::{checked_coord, BoardError, Position};
pub use side::{Piece, Side, ALL_SIDES};
