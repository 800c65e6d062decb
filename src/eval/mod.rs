//! Position evaluation.
//!
//! Scores a leaf position in absolute terms from material, file structure,
//! diagonal support, and passed-pawn race analysis.

pub(crate) mod heuristic;
pub mod race;
pub mod structure;

pub use heuristic::{evaluate, explain, Evaluation};
pub use race::{best_passed_distance, is_passed, race_winner};
pub use structure::FileStats;
