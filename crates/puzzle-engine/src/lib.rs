//! Puzzle-session engine for chess tactics mini-games.
//!
//! The registry describes each game, a [`PuzzleCollection`] holds its puzzles
//! by level, [`draw_level`] samples batches from it, and a [`Session`] plays
//! them one at a time.

pub mod collection;
pub mod error;
pub mod level;
pub mod registry;
pub mod session;

pub use collection::{Catalog, PuzzleCollection};
pub use error::EngineError;
pub use level::{draw_level, GameLevel, BONUS_LEVEL_NAME, PUZZLES_PER_LEVEL};
pub use registry::{Flavor, GameInfo, GameLogic, SolutionKind};
pub use session::{
    GameOverSummary, GameStatus, NoSolutionPrompt, PlayerStatus, Session, SessionSnapshot,
    MAX_HEALTH,
};
