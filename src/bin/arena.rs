//! Arena CLI.
//!
//! Plays pawn-chess games between the engine and/or a random mover and
//! outputs the game records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin arena -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --depth N         Engine search depth (default: 4)
//!   --movetime MS     Engine time budget per move in ms (default: none)
//!   --first KIND      First player: engine or random (default: engine)
//!   --second KIND     Second player: engine or random (default: random)
//!   --max-plies N     Ply limit before a game is drawn (default: 200)
//!   --random-plies N  Random opening plies (default: 2)
//!   --threads N       Number of parallel threads (default: 1)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --config FILE     JSON engine configuration
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

use pawnstorm::arena::{self, ArenaConfig, PlayerKind};
use pawnstorm::config::EngineConfig;

fn parse_player(value: &str) -> PlayerKind {
    PlayerKind::from_name(value).unwrap_or_else(|| {
        eprintln!("Unknown player kind: {} (expected engine or random)", value);
        std::process::exit(1);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ArenaConfig::default();
    let mut output_path: Option<String> = None;
    let mut depth: Option<u32> = None;
    let mut movetime: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.games = args[i].parse().expect("invalid --games value");
            }
            "--depth" => {
                i += 1;
                depth = Some(args[i].parse().expect("invalid --depth value"));
            }
            "--movetime" => {
                i += 1;
                movetime = Some(args[i].parse().expect("invalid --movetime value"));
            }
            "--first" => {
                i += 1;
                config.first = parse_player(&args[i]);
            }
            "--second" => {
                i += 1;
                config.second = parse_player(&args[i]);
            }
            "--max-plies" => {
                i += 1;
                config.max_plies = args[i].parse().expect("invalid --max-plies value");
            }
            "--random-plies" => {
                i += 1;
                config.random_plies = args[i].parse().expect("invalid --random-plies value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--config" => {
                i += 1;
                config.engine = match EngineConfig::from_json_file(Path::new(&args[i])) {
                    Ok(engine) => engine,
                    Err(e) => {
                        eprintln!("Failed to load {}: {}", args[i], e);
                        std::process::exit(1);
                    }
                };
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Explicit flags override the config file.
    if let Some(d) = depth {
        config.engine.depth = d;
    }
    if let Some(ms) = movetime {
        config.engine.movetime_ms = (ms > 0).then_some(ms);
    }
    if let Err(e) = config.engine.validate() {
        eprintln!("Invalid engine settings: {}", e);
        std::process::exit(1);
    }

    if !config.quiet {
        eprintln!(
            "Arena: {} games, {:?} vs {:?}, depth {}, {} threads",
            config.games, config.first, config.second, config.engine.depth, config.threads
        );
    }

    let start = Instant::now();
    let games = match arena::run_arena(&config) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("Arena failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        arena::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            arena::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            arena::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: arena [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N         Number of games to play (default: 10)");
    eprintln!("  --depth N         Engine search depth (default: 4)");
    eprintln!("  --movetime MS     Engine time budget per move in ms (default: none)");
    eprintln!("  --first KIND      First player: engine or random (default: engine)");
    eprintln!("  --second KIND     Second player: engine or random (default: random)");
    eprintln!("  --max-plies N     Ply limit before a game is drawn (default: 200)");
    eprintln!("  --random-plies N  Random opening plies (default: 2)");
    eprintln!("  --threads N       Number of parallel threads (default: 1)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --config FILE     JSON engine configuration");
    eprintln!("  --output FILE     Output file path (default: stdout)");
    eprintln!("  --quiet           Suppress summary output");
    eprintln!("  --help            Show this help");
}
