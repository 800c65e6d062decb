//! Behavioural properties of the evaluator and the search.
//!
//! Positions come from hand-built boards, PFEN strings, and short seeded
//! random playouts from the initial position.

use pawnstorm::agent::{Agent, RandomMover};
use pawnstorm::board::{apply_move, Coord, History, Move, Position, Side};
use pawnstorm::config::EngineConfig;
use pawnstorm::eval::{evaluate, explain};
use pawnstorm::protocol::parse_pfen;
use pawnstorm::rules::{MoveGenerator, PawnRules, WinCondition};
use pawnstorm::search::{search, SearchContext, SearchResult};

const PFENS: &[&str] = &[
    "8/pppppppp/8/8/8/8/PPPPPPPP/8 f",
    "8/p1p2pp1/1p1p3p/4p3/3P1P2/1PP4P/P3P1P1/8 s",
    "8/2p3p1/8/1P6/5p2/8/P3P3/8 f",
    "8/6pp/7p/8/8/8/1P4P1/8 s",
    "8/8/8/8/3p4/3P4/8/8 f",
];

fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

fn config(depth: u32) -> EngineConfig {
    EngineConfig {
        depth,
        ..EngineConfig::default()
    }
}

fn eval(position: &Position, side: Side) -> i32 {
    evaluate(position, &History::new(), side, &PawnRules, &EngineConfig::default())
}

/// Plays `plies` seeded random moves from the initial position.
fn random_position(seed: u64, plies: usize) -> (Position, Side) {
    let mut mover = RandomMover::new(seed);
    let mut position = Position::initial();
    let mut side = Side::First;
    let history = History::new();
    for _ in 0..plies {
        if PawnRules.winner(&position, &history, side.opponent()).is_some() {
            break;
        }
        let Some(mv) = mover.next_move(side, &position, &history, None) else {
            break;
        };
        position = apply_move(&position, mv).position;
        side = side.opponent();
    }
    (position, side)
}

fn sample_positions() -> Vec<(Position, Side)> {
    let mut positions: Vec<(Position, Side)> = PFENS.iter().map(|p| parse_pfen(p).unwrap()).collect();
    for seed in 1..=8u64 {
        positions.push(random_position(seed, 4 + 3 * seed as usize));
    }
    positions
}

fn run(position: &Position, side: Side, depth: u32) -> SearchResult {
    let config = config(depth);
    let history = History::new();
    let mut ctx = SearchContext::new(&PawnRules, &config, &history);
    search(&mut ctx, position, side)
}

/// Plain minimax without pruning, visiting children in generation order.
fn minimax(position: &Position, side: Side, ply: u32, config: &EngineConfig) -> (i32, Option<Move>) {
    let history = History::new();
    let leaf = || evaluate(position, &history, side, &PawnRules, config);

    if ply >= config.depth || PawnRules.winner(position, &history, side.opponent()).is_some() {
        return (leaf(), None);
    }
    let children = PawnRules.successors(position, side);
    if children.is_empty() {
        return (leaf(), None);
    }

    let mut best: Option<(i32, Move)> = None;
    for (mv, child) in children {
        let (score, _) = minimax(&child, side.opponent(), ply + 1, config);
        let better = match (best, side) {
            (None, _) => true,
            (Some((b, _)), Side::First) => score > b,
            (Some((b, _)), Side::Second) => score < b,
        };
        if better {
            best = Some((score, mv));
        }
    }
    let (score, mv) = best.unwrap();
    (score, Some(mv))
}

#[test]
fn evaluation_is_antisymmetric_under_mirroring() {
    for (position, side) in sample_positions() {
        for to_move in [side, side.opponent()] {
            assert_eq!(
                eval(&position.mirror(), to_move.opponent()),
                -eval(&position, to_move),
                "position {:?}, {:?} to move",
                position,
                to_move
            );
        }
    }
}

#[test]
fn search_score_is_antisymmetric_under_mirroring() {
    for (position, side) in sample_positions() {
        let direct = run(&position, side, 3);
        let mirrored = run(&position.mirror(), side.opponent(), 3);
        assert_eq!(mirrored.score, -direct.score);
        assert_eq!(mirrored.best_move.is_some(), direct.best_move.is_some());
    }
}

#[test]
fn alphabeta_matches_plain_minimax() {
    for (position, side) in sample_positions() {
        for depth in 1..=3 {
            let result = run(&position, side, depth);
            let (score, best) = minimax(&position, side, 0, &config(depth));
            assert_eq!(result.score, score, "depth {} score", depth);
            assert_eq!(result.best_move, best, "depth {} move", depth);
        }
    }
}

#[test]
fn alphabeta_matches_plain_minimax_in_deep_endgame() {
    let (position, side) = parse_pfen("8/2p3p1/8/1P6/5p2/8/P3P3/8 f").unwrap();
    let result = run(&position, side, 5);
    let (score, best) = minimax(&position, side, 0, &config(5));
    assert_eq!(result.score, score);
    assert_eq!(result.best_move, best);
}

/// Node count of the unpruned tree, with the same terminal tests as the search.
fn tree_size(position: &Position, side: Side, ply: u32, depth: u32) -> u64 {
    let history = History::new();
    if ply >= depth || PawnRules.winner(position, &history, side.opponent()).is_some() {
        return 1;
    }
    1 + PawnRules
        .successors(position, side)
        .iter()
        .map(|(_, child)| tree_size(child, side.opponent(), ply + 1, depth))
        .sum::<u64>()
}

#[test]
fn pruning_visits_fewer_nodes_than_the_full_tree() {
    let result = run(&Position::initial(), Side::First, 3);
    let full = tree_size(&Position::initial(), Side::First, 0, 3);
    assert!(result.nodes < full, "nodes: {} of {}", result.nodes, full);
}

#[test]
fn evaluate_and_search_are_pure() {
    for (position, side) in sample_positions() {
        let before = position;
        assert_eq!(eval(&position, side), eval(&position, side));
        assert_eq!(run(&position, side, 2), run(&position, side, 2));
        assert_eq!(position, before);
    }
}

#[test]
fn advancing_a_passed_pawn_never_lowers_its_score() {
    // b2 is passed; the pawns on files 5-7 are locked against each other.
    let start = Position::from_pieces([
        (at(1, 1), Side::First),
        (at(1, 6), Side::First),
        (at(6, 6), Side::Second),
        (at(6, 7), Side::Second),
        (at(5, 7), Side::Second),
    ]);

    for to_move in [Side::First, Side::Second] {
        let mut position = start;
        let mut previous = eval(&position, to_move);
        for row in 1..7u8 {
            position = position.move_piece(at(row, 1), at(row + 1, 1));
            let score = eval(&position, to_move);
            assert!(score >= previous, "row {}: {} < {}", row + 1, score, previous);
            previous = score;
        }

        // Same walk for Second on the mirrored board.
        let mut position = start.mirror();
        let mut previous = eval(&position, to_move.opponent());
        for row in (1..7u8).rev() {
            position = position.move_piece(at(row, 1), at(row - 1, 1));
            let score = eval(&position, to_move.opponent());
            assert!(score <= previous, "row {}: {} > {}", row - 1, score, previous);
            previous = score;
        }
    }
}

#[test]
fn doubled_pawns_score_worse_than_split_pawns() {
    let second = [(at(6, 3), Side::Second), (at(6, 4), Side::Second)];
    let doubled =
        Position::from_pieces([(at(1, 3), Side::First), (at(2, 3), Side::First)].into_iter().chain(second));
    let split =
        Position::from_pieces([(at(1, 3), Side::First), (at(2, 4), Side::First)].into_iter().chain(second));

    assert_eq!(eval(&doubled, Side::First), -1);
    assert_eq!(eval(&split, Side::First), 0);
    assert!(eval(&doubled, Side::First) < eval(&split, Side::First));

    // Mirrored, the doubled side is Second.
    assert!(eval(&doubled.mirror(), Side::Second) > eval(&split.mirror(), Side::Second));
}

#[test]
fn facing_pawns_with_second_to_move_next_to_promotion() {
    // Second's pawn on d2 is one push from the first row, so the only legal
    // move promotes and the search reports the win.
    let position = Position::from_pieces([(at(6, 3), Side::First), (at(1, 3), Side::Second)]);
    let result = run(&position, Side::Second, 2);

    let mv = result.best_move.unwrap();
    assert_eq!(mv.from, at(1, 3));
    assert_eq!(mv.to, at(0, 3));
    assert!(position.is_empty(mv.to));
    assert_eq!(result.score, -10_000);
}

#[test]
fn facing_pawns_on_home_rows_give_finite_score() {
    let position = Position::from_pieces([(at(1, 3), Side::First), (at(6, 3), Side::Second)]);
    let result = run(&position, Side::Second, 2);

    assert!(result.score.abs() < 10_000);
    assert_eq!(result.score, 0);
    let mv = result.best_move.unwrap();
    assert!(position.is_empty(mv.to));
    // The double push would let d2-d4 blockade it, so the single push is kept.
    assert_eq!(mv, Move { from: at(6, 3), to: at(5, 3) });
}

/// Reports First as winner once any First pawn stands on the last row.
struct FirstReachesLastRow;

impl WinCondition for FirstReachesLastRow {
    fn winner(&self, position: &Position, _history: &History, _mover: Side) -> Option<Side> {
        position
            .pieces_of(Side::First)
            .any(|at| at.row == 7)
            .then_some(Side::First)
    }
}

#[test]
fn pawn_on_promotion_row_scores_exact_win() {
    let lone = Position::from_pieces([(at(7, 0), Side::First)]);
    let contested = Position::from_pieces([(at(7, 0), Side::First), (at(3, 4), Side::Second)]);
    let config = EngineConfig::default();
    for position in [lone, contested] {
        for side in [Side::First, Side::Second] {
            let score = evaluate(&position, &History::new(), side, &FirstReachesLastRow, &config);
            assert_eq!(score, 10_000);
        }
    }
}

#[test]
fn two_doubled_pawns_alone_on_the_board() {
    let position = Position::from_pieces([(at(2, 3), Side::First), (at(3, 3), Side::First)]);
    let config = EngineConfig::default();
    let e = explain(&position, &History::new(), Side::Second, &FirstReachesLastRow, &config);

    assert_eq!(e.terminal, None);
    assert_eq!(e.material, config.material_weight * 2);
    assert_eq!(e.doubled, -config.doubled_penalty);
}
