//! Depth-limited minimax with alpha-beta pruning.
//!
//! First maximises, Second minimises, over absolute scores. Bounds are only
//! replaced on strict improvement, so among equally good moves the first one
//! generated wins. Positions are immutable values: each child comes from the
//! generator already built from the parent, and the parent is never touched,
//! so no undo step is needed between siblings.

use std::time::Instant;

use crate::board::{History, Move, Position, Side};
use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::rules::{MoveGenerator, WinCondition};

/// Full rule set consumed by the search.
pub trait Rules: MoveGenerator + WinCondition {}

impl<T: MoveGenerator + WinCondition + ?Sized> Rules for T {}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move, or `None` if it has no legal move or
    /// the game is already decided.
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
    /// False when the deadline cut the search short.
    pub completed: bool,
}

/// Per-search state: collaborators, configuration, and counters.
pub struct SearchContext<'a, R: ?Sized> {
    rules: &'a R,
    config: &'a EngineConfig,
    history: &'a History,
    deadline: Option<Instant>,
    nodes: u64,
    timed_out: bool,
}

impl<'a, R: Rules + ?Sized> SearchContext<'a, R> {
    pub fn new(rules: &'a R, config: &'a EngineConfig, history: &'a History) -> Self {
        SearchContext {
            rules,
            config,
            history,
            deadline: None,
            nodes: 0,
            timed_out: false,
        }
    }

    /// Stops expanding nodes once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Checks the clock every 64 nodes; sticky once expired.
    fn out_of_time(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if self.nodes & 63 == 0 && Instant::now() >= deadline {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    fn leaf(&self, position: &Position, side: Side) -> i32 {
        evaluate(position, self.history, side, self.rules, self.config)
    }
}

/// Score of a subtree and the move that produced it.
struct Node {
    score: i32,
    best: Option<Move>,
}

fn alphabeta<R: Rules + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    position: &Position,
    ply: u32,
    side: Side,
    mut alpha: i32,
    mut beta: i32,
) -> Node {
    ctx.nodes += 1;

    if ply >= ctx.config.depth
        || (ply > 0 && ctx.out_of_time())
        || ctx
            .rules
            .winner(position, ctx.history, side.opponent())
            .is_some()
    {
        return Node {
            score: ctx.leaf(position, side),
            best: None,
        };
    }

    let moves = ctx.rules.successors(position, side);
    let Some(&(first_move, _)) = moves.first() else {
        return Node {
            score: ctx.leaf(position, side),
            best: None,
        };
    };

    // A child interrupted by the deadline returns a partial score; it is
    // dropped and no later sibling is tried.
    let mut best = None;
    let mut score = match side {
        Side::First => {
            for (mv, child) in moves {
                let score = alphabeta(ctx, &child, ply + 1, Side::Second, alpha, beta).score;
                if ctx.timed_out {
                    break;
                }
                if score > alpha {
                    alpha = score;
                    best = Some(mv);
                }
                if alpha >= beta {
                    break;
                }
            }
            alpha
        }
        Side::Second => {
            for (mv, child) in moves {
                let score = alphabeta(ctx, &child, ply + 1, Side::First, alpha, beta).score;
                if ctx.timed_out {
                    break;
                }
                if score < beta {
                    beta = score;
                    best = Some(mv);
                }
                if alpha >= beta {
                    break;
                }
            }
            beta
        }
    };

    // The root always answers with a move when one exists.
    if ply == 0 && best.is_none() {
        best = Some(first_move);
        if ctx.timed_out {
            score = ctx.leaf(position, side);
        }
    }

    Node { score, best }
}

/// Searches `position` for `side` to the configured horizon.
pub fn search<R: Rules + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    position: &Position,
    side: Side,
) -> SearchResult {
    search_window(ctx, position, side, i32::MIN, i32::MAX)
}

/// Searches with an explicit `(alpha, beta)` window.
///
/// A window with `alpha >= beta` is not an error: the root is cut off after
/// its first child. When no root move beats the window, or the deadline
/// interrupts the first root move, the first generated move is returned
/// with the bound (or the static score of the root on timeout).
pub fn search_window<R: Rules + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    position: &Position,
    side: Side,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    let start_nodes = ctx.nodes;
    let node = alphabeta(ctx, position, 0, side, alpha, beta);
    SearchResult {
        best_move: node.best,
        score: node.score,
        nodes: ctx.nodes - start_nodes,
        completed: !ctx.timed_out,
    }
}
