use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct TrainerConfig {
    /// Directory holding one `<game-id>.json` collection per game
    pub puzzle_dir: PathBuf,

    pub game_id: String,

    /// Starting level; `None` plays the bonus round over the whole collection
    pub level: Option<u32>,

    /// Fixed seed for reproducible sessions
    pub rng_seed: Option<u64>,
}

impl TrainerConfig {
    pub fn from_env() -> Self {
        Self {
            puzzle_dir: env::var("PUZZLE_DIR")
                .unwrap_or_else(|_| "data/puzzles".to_string())
                .into(),
            game_id: env::var("GAME_ID").unwrap_or_else(|_| "knight-forks".to_string()),
            level: env::var("GAME_LEVEL").ok().and_then(|v| v.parse().ok()),
            rng_seed: env::var("RNG_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }
}
