//! Collection loading from `<dir>/<game-id>.json`.

use anyhow::Context;
use puzzle_engine::{Catalog, EngineError, PuzzleCollection};
use std::fs;
use std::path::Path;

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let pattern = format!("{}/*.json", dir.display());
    let paths: Vec<_> = glob::glob(&pattern)?.filter_map(|p| p.ok()).collect();

    let mut collections = Vec::with_capacity(paths.len());
    for path in &paths {
        let Some(game_id) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match PuzzleCollection::from_json(game_id, &json) {
            Ok(collection) => {
                tracing::info!(
                    "Loaded {}: {} levels, {} puzzles",
                    game_id,
                    collection.levels.len(),
                    collection.puzzle_count()
                );
                collections.push(collection);
            }
            Err(EngineError::GameNotFound(id)) => {
                tracing::warn!("Skipping {}: no registered game '{}'", path.display(), id);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to parse {}", path.display()));
            }
        }
    }

    Ok(Catalog::new(collections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const LEVEL_ZERO: &str = r#"{"0": [{"fen": "8/8/8/8/8/8/8/8", "solution": ["a1"]}]}"#;

    #[test]
    fn test_loads_bundled_collections() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/puzzles");
        let catalog = load_catalog(&dir).unwrap();

        let forks = catalog.get("knight-forks").unwrap();
        assert_eq!(forks.first_level(), Some(0));
        assert!(forks.has_level(1));
        assert!(forks.level(0).unwrap().iter().any(|p| p.has_no_solution()));
    }

    #[test]
    fn test_unregistered_game_is_skipped() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("counting.json"), LEVEL_ZERO).unwrap();
        fs::write(dir.path().join("memorizer.json"), LEVEL_ZERO).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a collection").unwrap();

        let catalog = load_catalog(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("counting").is_ok());
        assert!(catalog.get("memorizer").is_err());
    }

    #[test]
    fn test_malformed_collection_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("counting.json"), r#"{"0": 5}"#).unwrap();

        let err = load_catalog(dir.path()).unwrap_err();
        assert!(err.to_string().contains("counting.json"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let catalog = load_catalog(Path::new("/nonexistent/puzzles")).unwrap();
        assert!(catalog.is_empty());
    }
}
