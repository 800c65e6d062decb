//! PFEN (pawn FEN) encoding and decoding.
//!
//! PFEN is a compact one-line notation for a pawn-chess position, modelled
//! on chess FEN: eight ranks from row 7 down to row 0 separated by `/`,
//! `P` for a First pawn, `p` for a Second pawn, digits for runs of empty
//! squares, then a space and the side to move (`f` or `s`).
//!
//! Example (starting position): `8/pppppppp/8/8/8/8/PPPPPPPP/8 f`

use crate::board::{Coord, Piece, Position, Side, BOARD_SIZE};

/// PFEN of the standard starting position, First to move.
pub const INITIAL_PFEN: &str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 f";

/// Errors that can occur during PFEN parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PfenError {
    #[error("expected '<board> <side>', got {0} fields")]
    WrongFieldCount(usize),

    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} describes {squares} squares, expected 8")]
    BadRankLength { rank: usize, squares: usize },

    #[error("invalid board character: '{0}'")]
    InvalidChar(char),

    #[error("invalid side to move: '{0}'")]
    InvalidSide(String),
}

/// Parses a single rank (row) description into `pos`.
fn parse_rank(text: &str, row: u8, rank: usize, pos: &mut Position) -> Result<(), PfenError> {
    let mut col: usize = 0;
    for c in text.chars() {
        if let Some(run) = c.to_digit(10) {
            if run == 0 || run > BOARD_SIZE as u32 {
                return Err(PfenError::InvalidChar(c));
            }
            col += run as usize;
        } else {
            let piece = Piece::from_glyph(c).ok_or(PfenError::InvalidChar(c))?;
            if col < BOARD_SIZE as usize {
                *pos = pos.place(Coord::new(row, col as u8), piece);
            }
            col += 1;
        }
        if col > BOARD_SIZE as usize {
            return Err(PfenError::BadRankLength { rank, squares: col });
        }
    }
    if col != BOARD_SIZE as usize {
        return Err(PfenError::BadRankLength { rank, squares: col });
    }
    Ok(())
}

/// Parses a PFEN string into a position and the side to move.
pub fn parse_pfen(s: &str) -> Result<(Position, Side), PfenError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(PfenError::WrongFieldCount(fields.len()));
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(PfenError::WrongRankCount(ranks.len()));
    }

    let mut pos = Position::empty();
    for (i, rank) in ranks.iter().enumerate() {
        let row = BOARD_SIZE - 1 - i as u8;
        parse_rank(rank, row, i + 1, &mut pos)?;
    }

    let mut side_chars = fields[1].chars();
    let side = match (side_chars.next(), side_chars.next()) {
        (Some(c), None) => Side::from_pci_char(c),
        _ => None,
    }
    .ok_or_else(|| PfenError::InvalidSide(fields[1].to_string()))?;

    Ok((pos, side))
}

/// Encodes a position and side to move as PFEN.
pub fn encode_pfen(position: &Position, side: Side) -> String {
    let mut out = String::with_capacity(40);
    for i in 0..BOARD_SIZE {
        if i > 0 {
            out.push('/');
        }
        let row = BOARD_SIZE - 1 - i;
        let mut empty = 0;
        for col in 0..BOARD_SIZE {
            match position.piece_at(Coord::new(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece.glyph());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
    }
    out.push(' ');
    out.push(side.pci_char());
    out
}
