//! Puzzle collections: a game's registry entry plus its loaded puzzles.

use chess_core::Puzzle;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::EngineError;
use crate::registry::{self, Flavor, GameLogic};

/// On-disk shape of a collection document.
///
/// Level keys stay strings here: untagged variants see JSON object keys as
/// strings only, so they are converted after parsing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectionDocument {
    /// `{"0": [...], "1": [...]}`
    Leveled(BTreeMap<String, Vec<Puzzle>>),
    /// `[...]`, no levels.
    Flat(Vec<Puzzle>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleCollection {
    pub game_id: String,
    pub flavor: Flavor,
    pub logic: GameLogic,
    pub levels: BTreeMap<u32, Vec<Puzzle>>,
    /// Puzzles that belong to no level. Only reachable through the bonus round.
    pub unleveled: Vec<Puzzle>,
}

impl PuzzleCollection {
    /// Attach puzzles to a registered game.
    pub fn for_game(
        game_id: &str,
        levels: BTreeMap<u32, Vec<Puzzle>>,
        unleveled: Vec<Puzzle>,
    ) -> Result<Self, EngineError> {
        let info =
            registry::game_info(game_id).ok_or_else(|| EngineError::GameNotFound(game_id.to_string()))?;

        Ok(Self {
            game_id: game_id.to_string(),
            flavor: info.flavor.clone(),
            logic: info.logic,
            levels,
            unleveled,
        })
    }

    /// Parse a collection document for a registered game.
    ///
    /// The game id is checked first, so an unregistered game reports
    /// `GameNotFound` even when the document itself is malformed.
    pub fn from_json(game_id: &str, json: &str) -> Result<Self, EngineError> {
        if registry::game_info(game_id).is_none() {
            return Err(EngineError::GameNotFound(game_id.to_string()));
        }

        match serde_json::from_str(json)? {
            CollectionDocument::Leveled(raw) => {
                let levels = raw
                    .into_iter()
                    .map(|(key, puzzles)| {
                        let level = key
                            .parse::<u32>()
                            .map_err(|_| EngineError::InvalidLevelKey(key.clone()))?;
                        Ok((level, puzzles))
                    })
                    .collect::<Result<BTreeMap<_, _>, EngineError>>()?;
                Self::for_game(game_id, levels, Vec::new())
            }
            CollectionDocument::Flat(puzzles) => Self::for_game(game_id, BTreeMap::new(), puzzles),
        }
    }

    pub fn level(&self, level: u32) -> Option<&[Puzzle]> {
        self.levels.get(&level).map(Vec::as_slice)
    }

    pub fn has_level(&self, level: u32) -> bool {
        self.levels.contains_key(&level)
    }

    pub fn first_level(&self) -> Option<u32> {
        self.levels.keys().next().copied()
    }

    /// Every puzzle in the collection, levels first.
    pub fn all_puzzles(&self) -> impl Iterator<Item = &Puzzle> {
        self.levels.values().flatten().chain(self.unleveled.iter())
    }

    pub fn puzzle_count(&self) -> usize {
        self.all_puzzles().count()
    }
}

/// Loaded collections by game id. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    collections: HashMap<String, PuzzleCollection>,
}

impl Catalog {
    pub fn new<I>(collections: I) -> Self
    where
        I: IntoIterator<Item = PuzzleCollection>,
    {
        Self {
            collections: collections
                .into_iter()
                .map(|c| (c.game_id.clone(), c))
                .collect(),
        }
    }

    pub fn get(&self, game_id: &str) -> Result<&PuzzleCollection, EngineError> {
        self.collections
            .get(game_id)
            .ok_or_else(|| EngineError::GameNotFound(game_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn game_ids(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}
