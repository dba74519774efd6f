//! Play session: puzzle selection, guess checking, health and score.
//!
//! Every operation runs to completion synchronously, including a chained
//! auto-advance. Operations other than `start` are ignored unless the game is
//! in [`GameStatus::Playing`].

use chess_core::{parse_board, side_to_move, Board, Color, Puzzle};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::level::GameLevel;
use crate::registry::GameLogic;

pub const MAX_HEALTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Start,
    Playing,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStatus {
    Idle,
    Playing,
    WrongGuess,
    PrematureAdvancement,
    GaveUp,
    Respawn,
}

/// Whether the player has ever cleared a puzzle that has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoSolutionPrompt {
    Unresolved,
    Resolved,
}

/// What a HUD needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub player_status: PlayerStatus,
    pub health: u32,
    pub max_health: u32,
    pub score: u32,
    pub high_score: u32,
    pub good_guesses: Vec<String>,
    pub bad_guesses: Vec<String>,
    pub flipped: bool,
    pub complete: bool,
    pub show_no_solution_hint: bool,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverSummary {
    pub final_score: u32,
    pub previous_high_score: u32,
    pub new_high_score: bool,
}

#[derive(Debug)]
pub struct Session<R> {
    logic: GameLogic,
    pool: Vec<Puzzle>,
    rng: R,

    status: GameStatus,
    player_status: PlayerStatus,
    current: Option<Puzzle>,
    board: Board,
    flipped: bool,
    good_guesses: Vec<String>,
    bad_guesses: Vec<String>,
    health: u32,
    score: u32,
    high_score: u32,
    no_solution_prompt: NoSolutionPrompt,
    /// Puzzles moved past since the pool was last set.
    puzzles_cleared: usize,
}

impl<R: Rng> Session<R> {
    pub fn new(logic: GameLogic, pool: Vec<Puzzle>, rng: R) -> Result<Self, EngineError> {
        if pool.is_empty() {
            return Err(EngineError::EmptyPool);
        }

        Ok(Self {
            logic,
            pool,
            rng,
            status: GameStatus::Start,
            player_status: PlayerStatus::Idle,
            current: None,
            board: Board::empty(),
            flipped: false,
            good_guesses: Vec::new(),
            bad_guesses: Vec::new(),
            health: MAX_HEALTH,
            score: 0,
            high_score: 0,
            no_solution_prompt: NoSolutionPrompt::Unresolved,
            puzzles_cleared: 0,
        })
    }

    /// Session whose pool is one level batch.
    pub fn from_level(logic: GameLogic, level: GameLevel, rng: R) -> Result<Self, EngineError> {
        Self::new(logic, level.puzzles, rng)
    }

    /// Swap in a new pool (e.g. the next level). The puzzle in view, health
    /// and score are untouched.
    pub fn replace_pool(&mut self, pool: Vec<Puzzle>) -> Result<(), EngineError> {
        if pool.is_empty() {
            return Err(EngineError::EmptyPool);
        }
        self.pool = pool;
        self.puzzles_cleared = 0;
        Ok(())
    }

    /// Play (again). With `advance` a fresh puzzle is shown, otherwise the
    /// previous one stays in view.
    pub fn start(&mut self, advance: bool) {
        if self.status == GameStatus::Playing {
            debug!("start ignored, already playing");
            return;
        }

        if self.score > self.high_score {
            info!(score = self.score, previous = self.high_score, "New high score");
            self.high_score = self.score;
        }

        self.health = MAX_HEALTH;
        self.score = 0;
        self.status = GameStatus::Playing;

        if advance || self.current.is_none() {
            self.advance_to_next_puzzle();
            self.player_status = PlayerStatus::Playing;
        } else {
            self.player_status = PlayerStatus::Respawn;
        }
    }

    /// Show a random puzzle from the pool with empty guess lists.
    pub fn advance_to_next_puzzle(&mut self) {
        self.good_guesses.clear();
        self.bad_guesses.clear();

        let idx = self.rng.gen_range(0..self.pool.len());
        let puzzle = self.pool[idx].clone();

        self.board = match parse_board(&puzzle.position) {
            Ok(board) => board,
            Err(e) => {
                warn!(position = %puzzle.position, "Unparsable puzzle board: {e}");
                Board::empty()
            }
        };

        // Display-only puzzles may carry positions shakmaty rejects.
        match side_to_move(&puzzle.position) {
            Ok(turn) => self.flipped = turn == Color::Black,
            Err(e) => debug!("Keeping board orientation: {e}"),
        }

        debug!(position = %puzzle.position, solutions = puzzle.solutions.len(), "Next puzzle");
        self.current = Some(puzzle);
    }

    /// Check a guess. Returns whether it was accepted as a new correct answer.
    pub fn submit_guess(&mut self, raw: &str) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.player_status = PlayerStatus::Playing;

        let Some(puzzle) = self.current.as_ref() else {
            return false;
        };

        let already_good = self.good_guesses.iter().any(|g| g == raw)
            || puzzle
                .alias(raw)
                .is_some_and(|alias| self.good_guesses.iter().any(|g| g == alias));
        if already_good || self.bad_guesses.iter().any(|g| g == raw) {
            debug!(guess = raw, "Already guessed");
            return false;
        }

        if !puzzle.accepts(raw) {
            self.lose_health();
            self.bad_guesses.push(raw.to_string());
            self.player_status = PlayerStatus::WrongGuess;
            return false;
        }

        let canonical = puzzle.canonical(raw).to_string();
        if !self.good_guesses.contains(&canonical) {
            self.good_guesses.push(canonical);
        }
        self.score += 1;

        if self.logic.auto_advance && self.is_complete() {
            self.puzzles_cleared += 1;
            self.advance_to_next_puzzle();
        }

        true
    }

    /// The "done" button. Moves on if the puzzle is solved (or given up),
    /// otherwise costs health.
    pub fn request_advance(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if self.player_status == PlayerStatus::GaveUp || self.is_complete() {
            if self.current.as_ref().is_some_and(Puzzle::has_no_solution) {
                self.no_solution_prompt = NoSolutionPrompt::Resolved;
            }
            self.puzzles_cleared += 1;
            self.advance_to_next_puzzle();
            self.score += 1;
            self.player_status = PlayerStatus::Playing;
        } else {
            self.player_status = PlayerStatus::PrematureAdvancement;
            self.lose_health();
        }
    }

    /// Reveal every solution. Costs health unless the player was just
    /// penalized for advancing early or has only respawned.
    pub fn give_up(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if !matches!(
            self.player_status,
            PlayerStatus::PrematureAdvancement | PlayerStatus::Respawn
        ) {
            self.lose_health();
        }
        self.player_status = PlayerStatus::GaveUp;

        if let Some(puzzle) = self.current.as_ref() {
            for solution in puzzle.revealed_solutions() {
                if !self.good_guesses.iter().any(|g| g == solution) {
                    self.good_guesses.push(solution.to_string());
                }
            }
        }
    }

    fn lose_health(&mut self) {
        self.health = self.health.saturating_sub(1);
        if self.health < 1 && self.status != GameStatus::Over {
            info!(score = self.score, high_score = self.high_score, "Game over");
            self.status = GameStatus::Over;
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_status(&self) -> PlayerStatus {
        self.player_status
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn good_guesses(&self) -> &[String] {
        &self.good_guesses
    }

    pub fn bad_guesses(&self) -> &[String] {
        &self.bad_guesses
    }

    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Black is to move, so the board is drawn from black's side.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn logic(&self) -> &GameLogic {
        &self.logic
    }

    pub fn pool(&self) -> &[Puzzle] {
        &self.pool
    }

    pub fn puzzles_cleared(&self) -> usize {
        self.puzzles_cleared
    }

    pub fn no_solution_prompt(&self) -> NoSolutionPrompt {
        self.no_solution_prompt
    }

    /// Every solution has a canonical good guess. Puzzles with no solutions
    /// are complete as soon as they are shown.
    pub fn is_complete(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|p| self.good_guesses.len() >= p.solutions.len())
    }

    /// Nudge towards "No Solution" until the player has cleared one such puzzle.
    pub fn show_no_solution_hint(&self) -> bool {
        self.status == GameStatus::Playing
            && self.logic.allow_no_solution
            && self.no_solution_prompt == NoSolutionPrompt::Unresolved
            && self.current.as_ref().is_some_and(Puzzle::has_no_solution)
    }

    /// Solutions to highlight on the board after giving up.
    pub fn highlighted_squares(&self) -> Vec<&str> {
        match (&self.current, self.player_status) {
            (Some(puzzle), PlayerStatus::GaveUp) => {
                puzzle.solutions.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            player_status: self.player_status,
            health: self.health,
            max_health: MAX_HEALTH,
            score: self.score,
            high_score: self.high_score,
            good_guesses: self.good_guesses.clone(),
            bad_guesses: self.bad_guesses.clone(),
            flipped: self.flipped,
            complete: self.is_complete(),
            show_no_solution_hint: self.show_no_solution_hint(),
            source_url: self.current.as_ref().and_then(|p| p.source_url.clone()),
        }
    }

    /// Final numbers for the game-over screen. `None` unless the game is over.
    pub fn game_over_summary(&self) -> Option<GameOverSummary> {
        (self.status == GameStatus::Over).then_some(GameOverSummary {
            final_score: self.score,
            previous_high_score: self.high_score,
            new_high_score: self.score > self.high_score,
        })
    }
}
