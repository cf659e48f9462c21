use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sparring::config::EngineConfig;
use sparring::rules::{Game, Rules, Side};
use sparring::selector::MoveSelector;
use sparring::worker::spawn_selection;

/// Self-play between two casual opponents
#[derive(Parser, Debug)]
#[command(name = "sparring", version)]
struct Args {
    /// Difficulty level for White (1-10, clamped)
    #[arg(long)]
    white: Option<i64>,

    /// Difficulty level for Black (1-10, clamped)
    #[arg(long)]
    black: Option<i64>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    };

    // indexed by Side::to_index
    let mut selectors = [
        Some(player(&config, args.white, args.seed)),
        Some(player(&config, args.black, args.seed.map(|s| s.wrapping_add(1)))),
    ];

    let mut played = Vec::new();
    for _ in 0..args.max_plies {
        let slot = &mut selectors[game.turn().to_index()];
        let selector = slot.take().context("selector already in use")?;

        let selection = spawn_selection(selector, game).wait()?;
        *slot = Some(selection.selector);
        game = selection.rules;

        let Some(mv) = selection.best_move else {
            break;
        };
        let info = game.play(&mv)?;
        log::info!("{} {}", game.fullmoves(), info.uci);
        played.push(info.uci);
    }

    println!("{}", format_moves(&played));
    println!("{game}");
    println!("{}", result(&game));
    Ok(())
}

fn player(config: &EngineConfig, level: Option<i64>, seed: Option<u64>) -> MoveSelector {
    let mut config = config.clone();
    if let Some(level) = level {
        config.difficulty = level;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    MoveSelector::from_config(&config)
}

fn format_moves(moves: &[String]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn result(game: &Game) -> &'static str {
    if game.is_checkmate() {
        match game.turn() {
            Side::White => "0-1",
            Side::Black => "1-0",
        }
    } else if game.is_draw() {
        "1/2-1/2"
    } else {
        "*"
    }
}
