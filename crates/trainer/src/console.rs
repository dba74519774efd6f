//! Text rendering and command parsing for the terminal trainer.

use chess_core::board::{Board, BOARD_SIZE};
use puzzle_engine::{GameOverSummary, Session, MAX_HEALTH};
use rand::Rng;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Done,
    GiveUp,
    PlayAgain,
    Back,
    Status,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "done" | "next" => Command::Done,
        "give up" | "giveup" => Command::GiveUp,
        "again" => Command::PlayAgain,
        "back" => Command::Back,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Guess(trimmed.to_string()),
    }
}

pub const HELP: &str = "\
Type a square, move or number to guess.
  done     finished with this puzzle (no solution: just type done)
  give up  reveal the answers
  again    new game after game over
  back     new game on the same puzzle
  status   print session state as JSON
  quit";

/// Board as text, white at the bottom unless `flipped`.
pub fn render_board(board: &Board, flipped: bool) -> String {
    let order = axis_order(flipped);

    let mut out = String::new();
    for &rank in &order {
        let _ = write!(out, "{} ", BOARD_SIZE - rank);
        for &file in &order {
            let ch = board.cell(rank, file).map_or('.', |c| c.piece().char());
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &order {
        out.push(' ');
        out.push((b'a' + file as u8) as char);
    }
    out.push('\n');
    out
}

fn axis_order(flipped: bool) -> Vec<usize> {
    if flipped {
        (0..BOARD_SIZE).rev().collect()
    } else {
        (0..BOARD_SIZE).collect()
    }
}

pub fn render_hud<R: Rng>(session: &Session<R>) -> String {
    let hearts = "♥".repeat(session.health() as usize)
        + &"·".repeat((MAX_HEALTH - session.health()) as usize);
    let mut out = format!(
        "{}  score {}  best {}",
        hearts,
        session.score(),
        session.high_score()
    );
    if !session.good_guesses().is_empty() {
        let _ = write!(out, "\n  found: {}", session.good_guesses().join(" "));
    }
    if !session.bad_guesses().is_empty() {
        let _ = write!(out, "\n  wrong: {}", session.bad_guesses().join(" "));
    }
    let highlighted = session.highlighted_squares();
    if !highlighted.is_empty() {
        let _ = write!(out, "\n  answer: {}", highlighted.join(" "));
    }
    if session.show_no_solution_hint() {
        out.push_str("\n  nothing to find? type done");
    }
    if let Some(url) = session.current_puzzle().and_then(|p| p.source_url.as_deref()) {
        let _ = write!(out, "\n  source: {url}");
    }
    out
}

pub fn render_game_over(summary: &GameOverSummary) -> String {
    let mut out = format!("Game over! Final score: {}", summary.final_score);
    if summary.new_high_score {
        let _ = write!(out, " (new high score, previous {})", summary.previous_high_score);
    }
    out.push_str("\nType 'again' for a new puzzle, 'back' to retry this one, or 'quit'.");
    out
}
