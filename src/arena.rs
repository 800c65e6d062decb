//! Game runner.
//!
//! Plays complete games between two players from the starting position and
//! records the moves, the winner, and the final position. Games can run on a
//! rayon pool; records serialize to JSONL.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, RandomMover, SearchAgent};
use crate::board::{apply_move, History, Position, Side};
use crate::config::{ConfigError, EngineConfig};
use crate::protocol::notation::format_move;
use crate::protocol::pfen::encode_pfen;
use crate::rules::{PawnRules, WinCondition};

/// Errors from running a batch of games.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("arena worker thread panicked")]
    WorkerPanicked,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Kind of player seated at one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Engine,
    Random,
}

impl PlayerKind {
    pub fn from_name(s: &str) -> Option<PlayerKind> {
        match s {
            "engine" => Some(PlayerKind::Engine),
            "random" => Some(PlayerKind::Random),
            _ => None,
        }
    }
}

/// Configuration for a batch of games.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: usize,
    /// Plies after which an undecided game is scored as a draw.
    pub max_plies: usize,
    /// Opening plies played at random, so deterministic engines diverge.
    pub random_plies: usize,
    pub first: PlayerKind,
    pub second: PlayerKind,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Suppress per-game progress output.
    pub quiet: bool,
    /// Search settings for engine players.
    pub engine: EngineConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            max_plies: 200,
            random_plies: 2,
            first: PlayerKind::Engine,
            second: PlayerKind::Random,
            seed: 0,
            threads: 1,
            quiet: false,
            engine: EngineConfig::default(),
        }
    }
}

/// A complete game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    pub first: PlayerKind,
    pub second: PlayerKind,
    /// Winning side, or `None` for a draw by ply limit.
    pub winner: Option<Side>,
    pub plies: usize,
    /// Moves in coordinate notation, in play order.
    pub moves: Vec<String>,
    /// PFEN of the final position.
    pub final_pfen: String,
}

/// Win/draw totals over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaSummary {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

/// Seed for game `i`; 0 keeps entropy seeding.
fn game_seed(config: &ArenaConfig, i: usize) -> u64 {
    if config.seed == 0 {
        0
    } else {
        config.seed.wrapping_add(i as u64)
    }
}

fn make_player(kind: PlayerKind, config: &EngineConfig, seed: u64) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Engine => Box::new(SearchAgent::new(*config)),
        PlayerKind::Random => Box::new(RandomMover::new(seed)),
    }
}

/// Plays a single game.
pub fn play_game(config: &ArenaConfig, game_id: usize) -> GameRecord {
    let seed = game_seed(config, game_id);
    let rules = PawnRules;
    let mut players = [
        make_player(config.first, &config.engine, seed),
        make_player(config.second, &config.engine, seed.wrapping_mul(31)),
    ];
    let mut opening = RandomMover::new(seed.wrapping_mul(17));

    let mut position = Position::initial();
    let mut history = History::new();
    let mut side = Side::First;
    let mut winner = None;

    while history.len() < config.max_plies {
        let player: &mut dyn Agent = if history.len() < config.random_plies {
            &mut opening
        } else {
            players[side.index()].as_mut()
        };

        let mv = match player.next_move(side, &position, &history, None) {
            Some(mv) => mv,
            None => {
                winner = rules.winner(&position, &history, side.opponent());
                break;
            }
        };

        position = apply_move(&position, mv).position;
        history.push(side, mv, position);

        winner = rules.winner(&position, &history, side);
        side = side.opponent();
        if winner.is_some() {
            break;
        }
    }

    GameRecord {
        game_id,
        first: config.first,
        second: config.second,
        winner,
        plies: history.len(),
        moves: history.moves().map(format_move).collect(),
        final_pfen: encode_pfen(&position, side),
    }
}

/// Runs the configured number of games and collects their records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_arena(config: &ArenaConfig) -> Result<Vec<GameRecord>, ArenaError> {
    let mut games = Vec::with_capacity(config.games);
    run_arena_with_callback(config, |game| games.push(game))?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Runs games, calling `on_game` with each completed record as it finishes.
pub fn run_arena_with_callback<F>(config: &ArenaConfig, on_game: F) -> Result<(), ArenaError>
where
    F: FnMut(GameRecord) + Send,
{
    config.engine.validate()?;
    if config.threads > 1 {
        run_parallel(config, on_game)
    } else {
        run_sequential(config, on_game);
        Ok(())
    }
}

fn outcome(game: &GameRecord) -> String {
    match game.winner {
        Some(w) => format!("{} wins", w.name()),
        None => "draw".to_string(),
    }
}

/// Sequential arena: plays games one at a time.
fn run_sequential<F>(config: &ArenaConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.games {
        let game_start = Instant::now();
        let game = play_game(config, i);
        if !config.quiet {
            eprintln!(
                "Game {}/{}: {} after {} plies ({:.1}s)",
                i + 1,
                config.games,
                outcome(&game),
                game.plies,
                game_start.elapsed().as_secs_f64(),
            );
        }
        on_game(game);
    }
}

/// Parallel arena: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_parallel<F>(config: &ArenaConfig, mut on_game: F) -> Result<(), ArenaError>
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let game_start = Instant::now();
                    let game = play_game(&config_clone, i);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        eprintln!(
                            "Game {}/{}: {} after {} plies ({:.1}s)",
                            n,
                            config_clone.games,
                            outcome(&game),
                            game.plies,
                            game_start.elapsed().as_secs_f64(),
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    for game in rx {
        on_game(game);
    }

    handle.join().map_err(|_| ArenaError::WorkerPanicked)
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        write_game_json(game, out)?;
    }
    out.flush()
}

/// Writes a single game record as one JSON line.
pub fn write_game_json<W: Write>(game: &GameRecord, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, game)?;
    writeln!(out)
}

/// Tallies wins and draws.
pub fn summarize(games: &[GameRecord]) -> ArenaSummary {
    let mut summary = ArenaSummary::default();
    for game in games {
        match game.winner {
            Some(Side::First) => summary.first_wins += 1,
            Some(Side::Second) => summary.second_wins += 1,
            None => summary.draws += 1,
        }
    }
    summary
}

/// Prints the batch summary to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let summary = summarize(games);
    let total = games.len().max(1) as f64;
    eprintln!("=== Arena Summary ===");
    eprintln!("Games: {}", games.len());
    for (label, count) in [
        ("First", summary.first_wins),
        ("Second", summary.second_wins),
        ("Draws", summary.draws),
    ] {
        eprintln!("  {:>8}: {} ({:.1}%)", label, count, 100.0 * count as f64 / total);
    }
}
