//! Per-file pawn structure statistics.
//!
//! A single scan over the board collects, for each side and file: how many
//! of the side's pawns stand on the file or a neighbouring file, how far the
//! side has advanced on it, and whether it is occupied. The same scan counts
//! doubled pawns and under-supported pawns.

use crate::board::{Coord, Position, Side, BOARD_SIZE};

const FILES: usize = BOARD_SIZE as usize;

/// Structure statistics for both sides, indexed by `Side::index()` then file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    /// Pawns of the side on the file or an adjacent file.
    pub support: [[i32; FILES]; 2],
    /// Furthest advance on the file, in steps past the row behind the home row
    /// (`row - 1` for First, `6 - row` for Second), never below 0.
    pub advance: [[i32; FILES]; 2],
    /// Whether the side has a pawn on the file.
    pub occupied: [[bool; FILES]; 2],
    /// Extra pawns on already-occupied files.
    pub doubled: [i32; 2],
    /// Sum of negative net diagonal support over the side's pawns (<= 0).
    pub weak: [i32; 2],
}

/// Steps a pawn on `row` has advanced, as used by the race estimate.
#[inline]
fn advance_of(side: Side, row: u8) -> i32 {
    match side {
        Side::First => row as i32 - 1,
        Side::Second => 6 - row as i32,
    }
}

/// Net diagonal support of the pawn on `at`: +1 per own pawn diagonally
/// behind it, -1 per opposing pawn diagonally ahead of it.
pub fn net_support(position: &Position, at: Coord, side: Side) -> i32 {
    let fwd = side.forward();
    let mut net = 0;
    for dc in [-1, 1] {
        if let Some(behind) = at.offset(-fwd, dc) {
            if position.side_at(behind) == Some(side) {
                net += 1;
            }
        }
        if let Some(ahead) = at.offset(fwd, dc) {
            if position.side_at(ahead) == Some(side.opponent()) {
                net -= 1;
            }
        }
    }
    net
}

impl FileStats {
    /// Scans the board once.
    pub fn scan(position: &Position) -> Self {
        let mut stats = FileStats {
            support: [[0; FILES]; 2],
            advance: [[0; FILES]; 2],
            occupied: [[false; FILES]; 2],
            doubled: [0; 2],
            weak: [0; 2],
        };

        for (at, piece) in position.pieces() {
            let s = piece.side.index();
            let col = at.col as usize;

            stats.advance[s][col] = stats.advance[s][col].max(advance_of(piece.side, at.row));

            if stats.occupied[s][col] {
                stats.doubled[s] += 1;
            }
            stats.occupied[s][col] = true;

            stats.support[s][col] += 1;
            if col > 0 {
                stats.support[s][col - 1] += 1;
            }
            if col + 1 < FILES {
                stats.support[s][col + 1] += 1;
            }

            let net = net_support(position, at, piece.side);
            if net < 0 {
                stats.weak[s] += net;
            }
        }

        stats
    }

    /// Estimated plies `side` needs to force a pawn through, or `None` if no
    /// file gives it a majority.
    ///
    /// On a file where the side outnumbers the opponent, a breakthrough
    /// needs the lead pawn's remaining distance plus the distance for the
    /// best-placed neighbour to catch up, less the two final tempi.
    pub fn min_moves_to_promote(&self, side: Side) -> Option<i32> {
        let s = side.index();
        let o = side.opponent().index();
        let mut best: Option<i32> = None;

        for col in 0..FILES {
            if self.support[s][col] <= self.support[o][col] {
                continue;
            }
            let left = col.checked_sub(1).map(|c| self.advance[s][c]);
            let right = (col + 1 < FILES).then(|| self.advance[s][col + 1]);
            let neighbour = match (left, right) {
                (Some(l), Some(r)) => l.max(r),
                (Some(l), None) => l,
                (None, Some(r)) => r,
                (None, None) => 0,
            };
            let supporter = 7 - neighbour;
            let moves = 7 - self.advance[s][col] + supporter - 2;
            best = Some(best.map_or(moves, |b| b.min(moves)));
        }

        best
    }
}
