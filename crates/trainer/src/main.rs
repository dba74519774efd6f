//! Terminal tactics trainer.
//!
//! Loads puzzle collections from `PUZZLE_DIR`, draws a level of `GAME_ID` and
//! plays it on stdin/stdout. Finishing a level's worth of puzzles moves on to
//! the next level when there is one.

mod config;
mod console;
mod loader;

use std::io::{self, BufRead, Write};

use puzzle_engine::{GameLevel, GameStatus, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TrainerConfig;
use crate::console::Command;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = TrainerConfig::from_env();
    info!(puzzle_dir = %config.puzzle_dir.display(), game = %config.game_id, "Starting trainer");

    let catalog = loader::load_catalog(&config.puzzle_dir)?;
    let collection = catalog.get(&config.game_id)?;

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let level = catalog.draw_level(&config.game_id, config.level, &mut rng)?;
    let mut progress = LevelProgress::from(&level);
    let mut session = Session::from_level(collection.logic, level, StdRng::from_rng(&mut rng)?)?;

    println!("{}\n\n{}\n\n{}\n", collection.flavor.title, collection.flavor.story, collection.flavor.rules);
    println!("{}\n", console::HELP);
    session.start(true);
    show(&session, &progress)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match console::parse_command(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", console::HELP),
            Command::Status => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
            Command::PlayAgain => session.start(true),
            Command::Back => session.start(false),
            Command::Done => session.request_advance(),
            Command::GiveUp => session.give_up(),
            Command::Guess(guess) => {
                if session.submit_guess(&guess) {
                    println!("Correct!");
                }
            }
        }

        if session.status() == GameStatus::Playing && session.puzzles_cleared() >= progress.size {
            if let Some(next) = progress.next {
                let level = catalog.draw_level(&config.game_id, Some(next), &mut rng)?;
                println!("\nLevel {} complete! On to level {}.", progress.name, level.name);
                progress = LevelProgress::from(&level);
                session.replace_pool(level.puzzles)?;
                session.advance_to_next_puzzle();
            }
        }

        show(&session, &progress)?;
    }

    info!(score = session.score(), high_score = session.high_score(), "Bye");
    Ok(())
}

/// Where the player is in the level chain.
struct LevelProgress {
    name: String,
    size: usize,
    next: Option<u32>,
}

impl From<&GameLevel> for LevelProgress {
    fn from(level: &GameLevel) -> Self {
        Self {
            name: level.name.clone(),
            size: level.puzzles.len(),
            next: level.next_level,
        }
    }
}

fn show(session: &Session<StdRng>, progress: &LevelProgress) -> io::Result<()> {
    match session.status() {
        GameStatus::Over => {
            if let Some(summary) = session.game_over_summary() {
                println!("{}", console::render_game_over(&summary));
            }
        }
        _ => {
            println!(
                "\n[level {}: {}/{}]",
                progress.name,
                session.puzzles_cleared().min(progress.size),
                progress.size
            );
            print!("{}", console::render_board(session.board(), session.is_flipped()));
            println!("{}", console::render_hud(session));
        }
    }
    print!("> ");
    io::stdout().flush()
}
