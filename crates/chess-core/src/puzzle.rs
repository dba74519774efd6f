use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A pre-baked puzzle: a position plus the answers that count as correct.
///
/// Field names follow the puzzle collection documents (`fen`, `solution`,
/// `solutionAliases`, `site`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(rename = "fen")]
    pub position: String,
    /// Accepted raw answers. May be empty ("no solution" puzzles).
    #[serde(rename = "solution", default)]
    pub solutions: Vec<String>,
    /// Raw answer -> canonical display form. One-directional.
    #[serde(rename = "solutionAliases", default, skip_serializing_if = "HashMap::is_empty")]
    pub solution_aliases: HashMap<String, String>,
    #[serde(rename = "site", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Puzzle {
    pub fn new<I, S>(position: &str, solutions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            position: position.to_string(),
            solutions: solutions.into_iter().map(Into::into).collect(),
            solution_aliases: HashMap::new(),
            source_url: None,
        }
    }

    pub fn with_alias(mut self, raw: &str, canonical: &str) -> Self {
        self.solution_aliases.insert(raw.to_string(), canonical.to_string());
        self
    }

    pub fn with_source_url(mut self, url: &str) -> Self {
        self.source_url = Some(url.to_string());
        self
    }

    pub fn has_no_solution(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Alias target for `raw`, if one is defined.
    pub fn alias(&self, raw: &str) -> Option<&str> {
        self.solution_aliases.get(raw).map(String::as_str)
    }

    /// Form stored in the good-guess list: the alias if present, else `raw`.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        self.alias(raw).unwrap_or(raw)
    }

    /// `raw` is an alias key, an alias target, or a listed solution.
    pub fn accepts(&self, raw: &str) -> bool {
        self.solution_aliases.contains_key(raw)
            || self.solution_aliases.values().any(|v| v == raw)
            || self.solutions.iter().any(|s| s == raw)
    }

    /// Canonical forms of every solution, in solution order, without duplicates.
    pub fn revealed_solutions(&self) -> Vec<&str> {
        let mut revealed: Vec<&str> = Vec::with_capacity(self.solutions.len());
        for solution in &self.solutions {
            let canonical = self.canonical(solution);
            if !revealed.contains(&canonical) {
                revealed.push(canonical);
            }
        }
        revealed
    }
}
