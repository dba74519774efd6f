//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Level not found: {0}")]
    LevelNotFound(u32),

    #[error("Invalid level key: {0:?}")]
    InvalidLevelKey(String),

    #[error("Puzzle pool is empty")]
    EmptyPool,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
