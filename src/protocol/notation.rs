//! Coordinate move notation.
//!
//! Moves are written as two squares, each a file letter `a`-`h` (column
//! 0-7) followed by a rank digit `1`-`8` (row 0-7): `d2d4`.

use crate::board::{checked_coord, BoardError, Coord, Move};

/// Errors that can occur when parsing move notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 4 characters like 'd2d4', got '{0}'")]
    BadLength(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a square such as `e4`.
pub fn parse_square(s: &str) -> Result<Coord, NotationError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 || !bytes[0].is_ascii_lowercase() || !bytes[1].is_ascii_digit() {
        return Err(NotationError::InvalidSquare(s.to_string()));
    }
    let col = bytes[0] as i8 - b'a' as i8;
    let row = bytes[1] as i8 - b'1' as i8;
    Ok(checked_coord(row, col)?)
}

/// Parses a move such as `d2d4`.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s.len() != 4 || !s.is_ascii() {
        return Err(NotationError::BadLength(s.to_string()));
    }
    let from = parse_square(&s[..2])?;
    let to = parse_square(&s[2..])?;
    Ok(Move::new(from, to))
}

/// Formats a move in coordinate notation.
pub fn format_move(mv: Move) -> String {
    mv.to_string()
}

/// Formats a list of moves separated by spaces.
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().map(|m| format_move(*m)).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_move() {
        let mv = parse_move("d2d4").unwrap();
        assert_eq!(mv.from, Coord::new(1, 3));
        assert_eq!(mv.to, Coord::new(3, 3));
        assert_eq!(format_move(mv), "d2d4");
    }

    #[test]
    fn parse_corner_squares() {
        assert_eq!(parse_square("a1"), Ok(Coord::new(0, 0)));
        assert_eq!(parse_square("h8"), Ok(Coord::new(7, 7)));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            parse_move("d2d"),
            Err(NotationError::BadLength("d2d".to_string()))
        );
        assert!(parse_move("d2d4q").is_err());
    }

    #[test]
    fn rejects_off_board_squares() {
        assert_eq!(
            parse_move("i2i3"),
            Err(NotationError::Board(BoardError::OffBoard(1, 8)))
        );
        assert_eq!(
            parse_move("a9a8"),
            Err(NotationError::Board(BoardError::OffBoard(8, 0)))
        );
        assert_eq!(
            parse_move("a0a1"),
            Err(NotationError::Board(BoardError::OffBoard(-1, 0)))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_move("D2d4"),
            Err(NotationError::InvalidSquare("D2".to_string()))
        );
        assert_eq!(
            parse_move("2d4d"),
            Err(NotationError::InvalidSquare("2d".to_string()))
        );
    }

    #[test]
    fn format_move_list() {
        let moves = [parse_move("a2a3").unwrap(), parse_move("h7h5").unwrap()];
        assert_eq!(format_moves(&moves), "a2a3 h7h5");
    }
}
