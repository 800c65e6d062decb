//! Sides and pieces.
//!
//! Pawn chess has two sides and a single piece kind. `First` advances toward
//! row 7, `Second` toward row 0.

use serde::{Deserialize, Serialize};

/// One of the two competing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

/// Both sides in index order.
pub const ALL_SIDES: [Side; 2] = [Side::First, Side::Second];

impl Side {
    /// Returns the other side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Array index for per-side tables.
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Row delta of a single forward step.
    pub const fn forward(self) -> i8 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Row the side's pawns start on; double steps are allowed from here.
    pub const fn home_row(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 6,
        }
    }

    /// Row a pawn must reach to win the game.
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::First => 7,
            Side::Second => 0,
        }
    }

    /// Sign of this side's contribution to an absolute score.
    pub const fn sign(self) -> i32 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Returns the single-character protocol abbreviation.
    pub const fn pci_char(self) -> char {
        match self {
            Side::First => 'f',
            Side::Second => 's',
        }
    }

    /// Parses a side from its single-character protocol abbreviation.
    pub fn from_pci_char(c: char) -> Option<Side> {
        match c {
            'f' => Some(Side::First),
            's' => Some(Side::Second),
            _ => None,
        }
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Side::First => "first",
            Side::Second => "second",
        }
    }
}

/// A pawn. The only piece kind of this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
}

impl Piece {
    pub const fn new(side: Side) -> Self {
        Piece { side }
    }

    /// Board glyph: `P` for First, `p` for Second.
    pub const fn glyph(self) -> char {
        match self.side {
            Side::First => 'P',
            Side::Second => 'p',
        }
    }

    /// Parses a piece from its board glyph.
    pub fn from_glyph(c: char) -> Option<Piece> {
        match c {
            'P' => Some(Piece::new(Side::First)),
            'p' => Some(Piece::new(Side::Second)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for side in ALL_SIDES {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn pci_char_roundtrip() {
        for side in ALL_SIDES {
            assert_eq!(Side::from_pci_char(side.pci_char()), Some(side));
        }
        assert_eq!(Side::from_pci_char('x'), None);
    }

    #[test]
    fn directions_point_at_promotion_rows() {
        for side in ALL_SIDES {
            let distance = side.promotion_row() as i8 - side.home_row() as i8;
            assert_eq!(distance.signum(), side.forward());
            assert_eq!(distance.abs(), 6);
        }
    }

    #[test]
    fn glyph_roundtrip() {
        for side in ALL_SIDES {
            let piece = Piece::new(side);
            assert_eq!(Piece::from_glyph(piece.glyph()), Some(piece));
        }
        assert_eq!(Piece::from_glyph('k'), None);
    }
}
