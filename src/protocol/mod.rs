//! PCI protocol handling.
//!
//! This module implements parsing and serialization for the PCI (Pawn Chess
//! Interface) protocol, including PFEN position encoding, coordinate move
//! notation, and the command parser for the main loop.

pub mod notation;
pub mod parser;
pub mod pfen;

pub use notation::{format_move, format_moves, parse_move, parse_square, NotationError};
pub use parser::{parse_command, Command, GoParams, PositionSource};
pub use pfen::{encode_pfen, parse_pfen, PfenError, INITIAL_PFEN};
