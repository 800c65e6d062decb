//! Engine state management.
//!
//! Holds the current position, side to move, game history, and engine
//! configuration between protocol commands, and runs the search for the
//! `go` command.

use std::io::{self, Write};
use std::time::Duration;

use crate::agent::think;
use crate::board::{apply_move, History, Position, Side};
use crate::config::{EngineConfig, MAX_DEPTH, MAX_MOVETIME_MS, MAX_WEIGHT};
use crate::eval::explain;
use crate::protocol::notation::{format_move, parse_move, NotationError};
use crate::protocol::parser::{GoParams, PositionSource};
use crate::protocol::pfen::{parse_pfen, PfenError};
use crate::rules::{legal_moves, PawnRules};

/// Errors from setting up a position.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to parse PFEN: {0}")]
    Pfen(#[from] PfenError),

    #[error("failed to parse move: {0}")]
    Notation(#[from] NotationError),

    #[error("illegal move for {side}: {mv}")]
    IllegalMove { side: &'static str, mv: String },
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Position,
    pub side_to_move: Side,
    pub history: History,
    pub config: EngineConfig,
    rules: PawnRules,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine at the starting position with default configuration.
    pub fn new() -> Self {
        Engine {
            position: Position::initial(),
            side_to_move: Side::First,
            history: History::new(),
            config: EngineConfig::default(),
            rules: PawnRules,
        }
    }

    /// Resets the game state; options are kept.
    pub fn new_game(&mut self) {
        self.position = Position::initial();
        self.side_to_move = Side::First;
        self.history = History::new();
    }

    /// Sets the current position and replays `moves` from it.
    ///
    /// On error the previous position is kept.
    pub fn set_position(&mut self, source: &PositionSource, moves: &[String]) -> Result<(), EngineError> {
        let (mut position, mut side) = match source {
            PositionSource::StartPos => (Position::initial(), Side::First),
            PositionSource::Pfen(pfen) => parse_pfen(pfen)?,
        };
        let mut history = History::new();

        for text in moves {
            let mv = parse_move(text)?;
            if !legal_moves(&position, side).contains(&mv) {
                return Err(EngineError::IllegalMove {
                    side: side.name(),
                    mv: text.clone(),
                });
            }
            position = apply_move(&position, mv).position;
            history.push(side, mv, position);
            side = side.opponent();
        }

        self.position = position;
        self.side_to_move = side;
        self.history = history;
        Ok(())
    }

    /// Sets an engine option, logging invalid ones to stderr.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) {
        if let Err(e) = self.config.set_option(name, value) {
            eprintln!("setoption: {}", e);
        }
    }

    /// Handles the PCI handshake: writes id, options, and pciok.
    pub fn handle_pci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let defaults = EngineConfig::default();
        writeln!(out, "id name pawnstorm")?;
        writeln!(out, "id author pawnstorm")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            defaults.depth, MAX_DEPTH
        )?;
        writeln!(
            out,
            "option name MaterialWeight type spin default {} min 0 max {}",
            defaults.material_weight, MAX_WEIGHT
        )?;
        writeln!(
            out,
            "option name DoubledPenalty type spin default {} min 0 max {}",
            defaults.doubled_penalty, MAX_WEIGHT
        )?;
        writeln!(
            out,
            "option name MoveTime type spin default 0 min 0 max {}",
            MAX_MOVETIME_MS
        )?;
        writeln!(out, "pciok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command: searches and writes `info` and `bestmove`.
    pub fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let mut config = self.config;
        if let Some(depth) = params.depth {
            config.depth = depth;
        }
        let budget = params.movetime.map(Duration::from_millis);

        let (result, info) = think(
            &self.rules,
            &config,
            self.side_to_move,
            &self.position,
            &self.history,
            budget,
        );
        info.write_to(out)?;

        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", format_move(mv))?,
            None => writeln!(out, "bestmove none")?,
        }
        out.flush()
    }

    /// Handles the `eval` command: writes the static evaluation breakdown.
    pub fn handle_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let e = explain(
            &self.position,
            &self.history,
            self.side_to_move,
            &self.rules,
            &self.config,
        );
        let name = |s: Option<Side>| s.map_or("none", Side::name);
        writeln!(
            out,
            "eval score {} material {} doubled {} support {} race {} terminal {}",
            e.score,
            e.material,
            e.doubled,
            e.support,
            name(e.race),
            name(e.terminal)
        )?;
        out.flush()
    }
}
