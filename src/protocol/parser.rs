//! PCI command parser.
//!
//! Parses incoming PCI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::config::MAX_DEPTH;

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub movetime: Option<u64>,
    pub depth: Option<u32>,
}

/// Where a `position` command starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSource {
    StartPos,
    /// A PFEN string (board and side to move).
    Pfen(String),
}

/// A parsed host-to-engine PCI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the PCI protocol handshake.
    Pci,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the position, optionally followed by moves played from it.
    Position {
        source: PositionSource,
        moves: Vec<String>,
    },

    /// Begin searching with optional constraints.
    Go(GoParams),

    /// Print the static evaluation of the current position.
    Eval,

    /// Interrupt the current search.
    Stop,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "pci" => Some(Command::Pci),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "stop" => Some(Command::Stop),
        "eval" => Some(Command::Eval),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "go" => Some(parse_go(&tokens)),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position startpos [moves ...]` or `position pfen <board> <side> [moves ...]`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    let (source, rest) = match tokens.get(1) {
        Some(&"startpos") => (PositionSource::StartPos, &tokens[2..]),
        Some(&"pfen") => {
            if tokens.len() < 4 {
                eprintln!("malformed position: expected 'position pfen <board> <side>'");
                return None;
            }
            (
                PositionSource::Pfen(format!("{} {}", tokens[2], tokens[3])),
                &tokens[4..],
            )
        }
        _ => {
            eprintln!("malformed position: expected 'startpos' or 'pfen'");
            return None;
        }
    };

    let moves = match rest.first() {
        None => Vec::new(),
        Some(&"moves") => rest[1..].iter().map(|s| s.to_string()).collect(),
        Some(other) => {
            eprintln!("malformed position: unexpected token '{}'", other);
            return None;
        }
    };

    Some(Command::Position { source, moves })
}

/// Parses `go [movetime <ms>] [depth <n>]`. Bad values are skipped with a warning.
fn parse_go(tokens: &[&str]) -> Command {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "movetime" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u64>() {
                        Ok(v) => params.movetime = Some(v),
                        Err(_) => eprintln!("invalid movetime value: '{}'", tokens[i]),
                    }
                }
            }
            "depth" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u32>() {
                        Ok(v) if (1..=MAX_DEPTH).contains(&v) => params.depth = Some(v),
                        _ => eprintln!("invalid depth value: '{}'", tokens[i]),
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Command::Go(params)
}
