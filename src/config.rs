//! Engine configuration.
//!
//! Search horizon and evaluation weights live in one structure so that
//! tuning never touches the search or evaluator code. The protocol updates
//! it through `setoption`; the arena can load it from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default search horizon in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// Score reserved for a certain win. Positive favours First.
pub const WIN_SCORE: i32 = 10_000;

/// Deepest horizon accepted from any configuration source.
pub const MAX_DEPTH: u32 = 12;

/// Upper bound for `material_weight` and `doubled_penalty`.
pub const MAX_WEIGHT: i32 = 1_000;

/// Bounds for `win_score`. The lower bound leaves room for the clamped
/// heuristic range `±(win_score - 1)`.
pub const MIN_WIN_SCORE: i32 = 2;
pub const MAX_WIN_SCORE: i32 = 1_000_000;

/// Longest per-move time budget, in milliseconds.
pub const MAX_MOVETIME_MS: u64 = 600_000;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {name}: '{value}'")]
    InvalidOption { name: String, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Tunable parameters of the search and evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search horizon in plies.
    pub depth: u32,
    /// Value of one pawn; also the unit of the support penalty.
    pub material_weight: i32,
    /// Cost of each doubled pawn.
    pub doubled_penalty: i32,
    /// Score of a certain win. Heuristic scores stay strictly inside it.
    pub win_score: i32,
    /// Per-move time budget used when the host passes none.
    pub movetime_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            material_weight: 50,
            doubled_penalty: 1,
            win_score: WIN_SCORE,
            movetime_ms: None,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("depth", self.depth, 1, MAX_DEPTH)?;
        check_range("material_weight", self.material_weight, 0, MAX_WEIGHT)?;
        check_range("doubled_penalty", self.doubled_penalty, 0, MAX_WEIGHT)?;
        check_range("win_score", self.win_score, MIN_WIN_SCORE, MAX_WIN_SCORE)?;
        if let Some(ms) = self.movetime_ms {
            check_range("movetime_ms", ms, 1, MAX_MOVETIME_MS)?;
        }
        Ok(())
    }

    /// Applies a protocol option by name.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let raw = value.unwrap_or("");
        let invalid = || ConfigError::InvalidOption {
            name: name.to_string(),
            value: raw.to_string(),
        };
        match name {
            "Depth" => {
                let depth: u32 = raw.parse().map_err(|_| invalid())?;
                self.depth = check_range(name, depth, 1, MAX_DEPTH).map_err(|_| invalid())?;
            }
            "MaterialWeight" => {
                let weight: i32 = raw.parse().map_err(|_| invalid())?;
                self.material_weight =
                    check_range(name, weight, 0, MAX_WEIGHT).map_err(|_| invalid())?;
            }
            "DoubledPenalty" => {
                let penalty: i32 = raw.parse().map_err(|_| invalid())?;
                self.doubled_penalty =
                    check_range(name, penalty, 0, MAX_WEIGHT).map_err(|_| invalid())?;
            }
            "MoveTime" => {
                let ms: u64 = raw.parse().map_err(|_| invalid())?;
                let ms = check_range(name, ms, 0, MAX_MOVETIME_MS).map_err(|_| invalid())?;
                self.movetime_ms = if ms == 0 { None } else { Some(ms) };
            }
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }
}

/// Returns `value` if it lies in `min..=max`.
fn check_range<T>(name: &str, value: T, min: T, max: T) -> Result<T, ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ConfigError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}
