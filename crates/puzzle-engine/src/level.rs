//! Level sampling: bounded batches drawn without replacement.

use chess_core::Puzzle;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::collection::{Catalog, PuzzleCollection};
use crate::error::EngineError;

pub const PUZZLES_PER_LEVEL: usize = 10;

/// Batch name used when no level is requested.
pub const BONUS_LEVEL_NAME: &str = "bonus";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLevel {
    pub name: String,
    pub level: Option<u32>,
    pub puzzles: Vec<Puzzle>,
    /// `None` on the last level and in the bonus round.
    pub next_level: Option<u32>,
}

impl GameLevel {
    pub fn is_bonus(&self) -> bool {
        self.level.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next_level.is_none()
    }
}

/// Draw a batch from one level, or from the whole collection when `level` is `None`.
///
/// The collection is never modified; each call samples from its own working copy.
pub fn draw_level<R: Rng>(
    collection: &PuzzleCollection,
    level: Option<u32>,
    rng: &mut R,
) -> Result<GameLevel, EngineError> {
    let (name, candidates): (String, Vec<Puzzle>) = match level {
        None => (
            BONUS_LEVEL_NAME.to_string(),
            collection.all_puzzles().cloned().collect(),
        ),
        Some(n) => {
            let puzzles = collection.level(n).ok_or(EngineError::LevelNotFound(n))?;
            (n.to_string(), puzzles.to_vec())
        }
    };

    let pool_size = candidates.len();
    let puzzles = sample_without_replacement(candidates, PUZZLES_PER_LEVEL, rng);

    let next_level = level
        .and_then(|n| n.checked_add(1))
        .filter(|next| collection.has_level(*next));

    info!(
        game = %collection.game_id,
        level = %name,
        drawn = puzzles.len(),
        pool = pool_size,
        "Drew puzzle batch"
    );

    Ok(GameLevel {
        name,
        level,
        puzzles,
        next_level,
    })
}

impl Catalog {
    /// Draw a batch for a game by id.
    pub fn draw_level<R: Rng>(
        &self,
        game_id: &str,
        level: Option<u32>,
        rng: &mut R,
    ) -> Result<GameLevel, EngineError> {
        draw_level(self.get(game_id)?, level, rng)
    }
}

/// Remove up to `count` uniformly random items from `pool`, in draw order.
fn sample_without_replacement<T, R: Rng>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    let mut drawn = Vec::with_capacity(count.min(pool.len()));
    while drawn.len() < count && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        drawn.push(pool.swap_remove(idx));
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    fn puzzle(tag: &str) -> Puzzle {
        Puzzle::new("8/8/8/8/8/8/8/8", [tag])
    }

    fn collection(levels: &[(u32, usize)]) -> PuzzleCollection {
        let levels: BTreeMap<u32, Vec<Puzzle>> = levels
            .iter()
            .map(|&(n, size)| (n, (0..size).map(|i| puzzle(&format!("L{n}P{i}"))).collect()))
            .collect();
        PuzzleCollection::for_game("knight-forks", levels, Vec::new()).unwrap()
    }

    fn tags(level: &GameLevel) -> HashSet<String> {
        level.puzzles.iter().map(|p| p.solutions[0].clone()).collect()
    }

    #[test]
    fn test_small_level_returns_everything() {
        let collection = collection(&[(0, 3), (1, 1)]);
        let mut rng = StdRng::seed_from_u64(42);

        let level = draw_level(&collection, Some(0), &mut rng).unwrap();
        assert_eq!(level.name, "0");
        assert_eq!(level.level, Some(0));
        assert_eq!(level.puzzles.len(), 3);
        assert_eq!(tags(&level), HashSet::from(["L0P0".to_string(), "L0P1".to_string(), "L0P2".to_string()]));
        assert_eq!(level.next_level, Some(1));

        let last = draw_level(&collection, Some(1), &mut rng).unwrap();
        assert_eq!(last.puzzles, vec![puzzle("L1P0")]);
        assert_eq!(last.next_level, None);
        assert!(last.is_last());
    }

    #[test]
    fn test_large_level_is_capped_and_distinct() {
        let collection = collection(&[(0, 25)]);
        let mut rng = StdRng::seed_from_u64(7);

        let level = draw_level(&collection, Some(0), &mut rng).unwrap();
        assert_eq!(level.puzzles.len(), PUZZLES_PER_LEVEL);
        assert_eq!(tags(&level).len(), PUZZLES_PER_LEVEL);
    }

    #[test]
    fn test_repeated_draws_see_full_pool() {
        let collection = collection(&[(0, 12)]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..5 {
            let level = draw_level(&collection, Some(0), &mut rng).unwrap();
            assert_eq!(level.puzzles.len(), PUZZLES_PER_LEVEL);
        }
        assert_eq!(collection.level(0).map(<[Puzzle]>::len), Some(12));
    }

    #[test]
    fn test_bonus_round_pools_every_level() {
        let mut collection = collection(&[(0, 2), (1, 2)]);
        collection.unleveled.push(puzzle("extra"));
        let mut rng = StdRng::seed_from_u64(3);

        let level = draw_level(&collection, None, &mut rng).unwrap();
        assert_eq!(level.name, BONUS_LEVEL_NAME);
        assert!(level.is_bonus());
        assert_eq!(level.next_level, None);
        assert_eq!(level.puzzles.len(), 5);
        assert!(tags(&level).contains("extra"));
    }

    #[test]
    fn test_missing_level() {
        let collection = collection(&[(0, 3), (1, 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = draw_level(&collection, Some(5), &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::LevelNotFound(5)));
    }

    #[test]
    fn test_gap_in_levels_ends_chain() {
        let collection = collection(&[(0, 1), (2, 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        let level = draw_level(&collection, Some(0), &mut rng).unwrap();
        assert_eq!(level.next_level, None);
    }

    #[test]
    fn test_catalog_unknown_game() {
        let catalog = Catalog::new([collection(&[(0, 1)])]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = catalog.draw_level("counting", Some(0), &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::GameNotFound(id) if id == "counting"));
        assert!(catalog.draw_level("knight-forks", Some(0), &mut rng).is_ok());
    }
}
