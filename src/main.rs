//! Pawnstorm -- a pawn-chess engine implementing the PCI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the PCI (Pawn Chess Interface) convention.

use std::io::{self, BufRead};

use pawnstorm::engine::Engine;
use pawnstorm::protocol::parser::{parse_command, Command};

/// Runs the main PCI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::Pci => engine.handle_pci(&mut out),
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(&name, value.as_deref());
                Ok(())
            }
            Command::NewGame => {
                engine.new_game();
                Ok(())
            }
            Command::Position { source, moves } => {
                if let Err(e) = engine.set_position(&source, &moves) {
                    eprintln!("{}", e);
                }
                Ok(())
            }
            Command::Go(params) => engine.handle_go(&params, &mut out),
            Command::Eval => engine.handle_eval(&mut out),
            Command::Stop => {
                // Searches run to completion synchronously; nothing to interrupt.
                Ok(())
            }
            Command::Quit => break,
        };

        if let Err(e) = written {
            eprintln!("output error: {}", e);
            break;
        }
    }
}
