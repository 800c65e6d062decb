//! Static position evaluation.
//!
//! Scores are absolute: positive favours First, negative favours Second,
//! whichever side is to move. `±win_score` is reserved for certain wins
//! (a finished game or a decided promotion race); every heuristic total is
//! clamped strictly inside that range so alpha-beta bounds stay sound.
//!
//! Components:
//! - Terminal check through the win condition
//! - Material balance
//! - Doubled pawns
//! - Pawns attacked more often than they are defended
//! - Passed-pawn race against the opponent's best breakthrough

use crate::board::{History, Position, Side};
use crate::config::EngineConfig;
use crate::rules::WinCondition;

use super::race::race_winner;
use super::structure::FileStats;

/// Breakdown of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Winner reported by the win condition, if the game is over.
    pub terminal: Option<Side>,
    pub material: i32,
    pub doubled: i32,
    pub support: i32,
    /// Clamped sum of the heuristic terms.
    pub positional: i32,
    /// Side that wins the promotion race outright, if any.
    pub race: Option<Side>,
    /// Final score.
    pub score: i32,
}

/// Evaluates `position` at a search leaf where `side_to_move` is to move.
pub fn evaluate<R>(
    position: &Position,
    history: &History,
    side_to_move: Side,
    rules: &R,
    config: &EngineConfig,
) -> i32
where
    R: WinCondition + ?Sized,
{
    explain(position, history, side_to_move, rules, config).score
}

/// Like [`evaluate`], but returns every component of the score.
pub fn explain<R>(
    position: &Position,
    history: &History,
    side_to_move: Side,
    rules: &R,
    config: &EngineConfig,
) -> Evaluation
where
    R: WinCondition + ?Sized,
{
    let win = config.win_score;

    // The win condition is asked about the side whose turn follows.
    if let Some(winner) = rules.winner(position, history, side_to_move.opponent()) {
        return Evaluation {
            terminal: Some(winner),
            score: winner.sign() * win,
            ..Evaluation::default()
        };
    }

    let stats = FileStats::scan(position);
    let (f, s) = (Side::First.index(), Side::Second.index());

    let material = config.material_weight
        * (position.count(Side::First) as i32 - position.count(Side::Second) as i32);
    let doubled = -config.doubled_penalty * (stats.doubled[f] - stats.doubled[s]);
    let support = config.material_weight * (stats.weak[f] - stats.weak[s]);
    let positional = (material + doubled + support).clamp(-(win - 1), win - 1);

    let race = race_winner(position, &stats);
    let score = match race {
        Some(side) => side.sign() * win,
        None => positional,
    };

    Evaluation {
        terminal: None,
        material,
        doubled,
        support,
        positional,
        race,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use crate::rules::PawnRules;

    /// A win condition that never ends the game.
    struct Endless;

    impl WinCondition for Endless {
        fn winner(&self, _: &Position, _: &History, _: Side) -> Option<Side> {
            None
        }
    }

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col)
    }

    fn eval(pos: &Position, side: Side) -> i32 {
        evaluate(pos, &History::new(), side, &PawnRules, &EngineConfig::default())
    }

    #[test]
    fn initial_position_is_level() {
        assert_eq!(eval(&Position::initial(), Side::First), 0);
        assert_eq!(eval(&Position::initial(), Side::Second), 0);
    }

    #[test]
    fn promoted_pawn_scores_win() {
        let pos = Position::from_pieces([(at(7, 0), Side::First), (at(6, 5), Side::Second)]);
        assert_eq!(eval(&pos, Side::First), 10_000);
        assert_eq!(eval(&pos, Side::Second), 10_000);
        assert_eq!(eval(&pos.mirror(), Side::First), -10_000);
    }

    #[test]
    fn material_counts_fifty_per_pawn() {
        // Extra First pawn on a blocked file: no passers, no contact.
        let pos = Position::initial().remove(at(6, 0));
        let e = explain(&pos, &History::new(), Side::First, &PawnRules, &EngineConfig::default());
        assert_eq!(e.material, 50);
        assert_eq!(e.race, None);
    }

    #[test]
    fn doubled_pawns_and_material_breakdown() {
        let pos = Position::from_pieces([(at(2, 3), Side::First), (at(3, 3), Side::First)]);
        let e = explain(&pos, &History::new(), Side::Second, &Endless, &EngineConfig::default());
        assert_eq!(e.terminal, None);
        assert_eq!(e.material, 100);
        assert_eq!(e.doubled, -1);
        assert_eq!(e.support, 0);
        assert_eq!(e.positional, 99);
        assert_eq!(e.race, Some(Side::First));
        assert_eq!(e.score, 10_000);
    }

    #[test]
    fn attacked_pawn_costs_material_weight() {
        // d4 attacked by e5 and undefended; e5 attacked by d4 and undefended.
        // Adding a c3 defender leaves d4 at net zero.
        let base = Position::from_pieces([
            (at(3, 3), Side::First),
            (at(4, 4), Side::Second),
            (at(6, 0), Side::Second),
            (at(1, 7), Side::First),
        ]);
        let config = EngineConfig::default();
        let e = explain(&base, &History::new(), Side::First, &Endless, &config);
        assert_eq!(e.support, 0);

        let defended = base.place(at(2, 2), crate::board::Piece::new(Side::First));
        let e = explain(&defended, &History::new(), Side::First, &Endless, &config);
        assert_eq!(e.support, 50);
    }

    #[test]
    fn heuristic_scores_stay_inside_win_range() {
        let config = EngineConfig {
            material_weight: 5_000,
            ..EngineConfig::default()
        };
        // Every remaining First pawn still faces a Second pawn on an adjacent file.
        let pos = Position::initial()
            .remove(at(6, 0))
            .remove(at(6, 3))
            .remove(at(6, 6));
        let e = explain(&pos, &History::new(), Side::First, &Endless, &config);
        assert_eq!(e.race, None);
        assert_eq!(e.positional, config.win_score - 1);
        assert_eq!(e.score, config.win_score - 1);
    }

    #[test]
    fn evaluation_is_pure() {
        let pos = Position::from_pieces([
            (at(3, 3), Side::First),
            (at(4, 4), Side::Second),
            (at(2, 2), Side::First),
            (at(5, 6), Side::Second),
        ]);
        let a = eval(&pos, Side::First);
        let b = eval(&pos, Side::First);
        assert_eq!(a, b);
    }
}
