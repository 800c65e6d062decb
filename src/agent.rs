//! Top-level decision making.
//!
//! An `Agent` answers the host's only question: given the side to move, the
//! position, the history, and a time budget, which move to play. The search
//! agent runs alpha-beta; the random mover is a baseline opponent.

use std::io::Write;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{History, Move, Position, Side};
use crate::config::EngineConfig;
use crate::rules::{legal_moves, PawnRules};
use crate::search::{search, Rules, SearchContext, SearchInfo, SearchResult};

/// A player that picks moves.
pub trait Agent {
    /// Returns the move to play, or `None` if `side` has no legal move.
    fn next_move(
        &mut self,
        side: Side,
        position: &Position,
        history: &History,
        time_budget: Option<Duration>,
    ) -> Option<Move>;
}

/// Runs a full search and reports its statistics.
///
/// The deadline is `time_budget`, or the configured move time when the host
/// passes none; with neither, only the depth horizon bounds the search.
pub fn think<R: Rules + ?Sized>(
    rules: &R,
    config: &EngineConfig,
    side: Side,
    position: &Position,
    history: &History,
    time_budget: Option<Duration>,
) -> (SearchResult, SearchInfo) {
    let start = Instant::now();
    let budget = time_budget.or(config.movetime_ms.map(Duration::from_millis));
    let mut ctx = SearchContext::new(rules, config, history).with_deadline(budget.map(|b| start + b));
    let result = search(&mut ctx, position, side);
    let info = SearchInfo {
        depth: config.depth,
        nodes: result.nodes,
        score: result.score,
        elapsed_ms: start.elapsed().as_millis() as u64,
    };
    (result, info)
}

/// Picks the best move for `side` with the standard rules.
pub fn next_move(
    side: Side,
    position: &Position,
    history: &History,
    time_budget: Option<Duration>,
    config: &EngineConfig,
) -> Option<Move> {
    think(&PawnRules, config, side, position, history, time_budget)
        .0
        .best_move
}

/// Alpha-beta player.
pub struct SearchAgent<R = PawnRules> {
    rules: R,
    pub config: EngineConfig,
    last: Option<SearchInfo>,
}

impl SearchAgent<PawnRules> {
    pub fn new(config: EngineConfig) -> Self {
        SearchAgent::with_rules(PawnRules, config)
    }
}

impl<R: Rules> SearchAgent<R> {
    pub fn with_rules(rules: R, config: EngineConfig) -> Self {
        SearchAgent {
            rules,
            config,
            last: None,
        }
    }

    /// Statistics of the most recent search.
    pub fn last_info(&self) -> Option<SearchInfo> {
        self.last
    }

    /// Searches and writes the `info` line to `out`.
    pub fn next_move_verbose<W: Write>(
        &mut self,
        side: Side,
        position: &Position,
        history: &History,
        time_budget: Option<Duration>,
        out: &mut W,
    ) -> Option<Move> {
        let mv = self.next_move(side, position, history, time_budget);
        if let Some(info) = self.last {
            let _ = info.write_to(out);
        }
        mv
    }
}

impl<R: Rules> Agent for SearchAgent<R> {
    fn next_move(
        &mut self,
        side: Side,
        position: &Position,
        history: &History,
        time_budget: Option<Duration>,
    ) -> Option<Move> {
        let (result, info) = think(&self.rules, &self.config, side, position, history, time_budget);
        self.last = Some(info);
        result.best_move
    }
}

/// Plays a uniformly random legal move.
pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    /// Seeded mover; a seed of 0 draws from entropy.
    pub fn new(seed: u64) -> Self {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        RandomMover { rng }
    }
}

impl Agent for RandomMover {
    fn next_move(
        &mut self,
        side: Side,
        position: &Position,
        _history: &History,
        _time_budget: Option<Duration>,
    ) -> Option<Move> {
        let moves = legal_moves(position, side);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..moves.len());
        Some(moves[idx])
    }
}
