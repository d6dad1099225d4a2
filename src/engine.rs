//! The autocomplete facade: training, querying and ranking.
//!
//! ```
//! use autocomplete::AutocompleteEngine;
//!
//! let mut engine = AutocompleteEngine::new();
//! engine.train("cat cat car");
//!
//! let ranked = engine.suggest("ca").unwrap();
//! assert_eq!(ranked[0].suggestion, "cat");
//! assert_eq!(ranked[0].likelihood, 2);
//! assert_eq!(ranked[1].suggestion, "car");
//! ```

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::candidate::Candidate;
use crate::error::AutocompleteError;
use crate::normalize::{normalize, tokens};
use crate::roots::RootIndex;

/// The two operations a presentation layer needs from an autocomplete backend.
pub trait AutocompleteProvider {
    /// Learns every usable word in `passage`.
    fn train(&mut self, passage: &str);

    /// Ranked suggestions for `fragment`; `None` and blank fragments yield no results.
    fn get_suggestions(&self, fragment: Option<&str>) -> Result<Vec<Candidate>, AutocompleteError>;
}

/// Outcome of a training call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainReport {
    /// Tokens inserted into the trie.
    pub accepted: usize,
    /// Tokens dropped because no root exists for their first character.
    pub skipped: usize,
}

impl TrainReport {
    fn merge(&mut self, other: TrainReport) {
        self.accepted += other.accepted;
        self.skipped += other.skipped;
    }
}

/// In-memory, frequency-ranked autocomplete engine.
#[derive(Debug, Default)]
pub struct AutocompleteEngine {
    roots: RootIndex,
    distinct: usize,
}

impl AutocompleteEngine {
    /// Creates an engine with an empty root for each letter.
    pub fn new() -> Self {
        Self {
            roots: RootIndex::new(),
            distinct: 0,
        }
    }

    /// Splits `passage` on whitespace and records one occurrence per usable word.
    ///
    /// Tokens that normalize to nothing are dropped silently. Tokens that start
    /// with something other than a letter are counted as skipped.
    pub fn train(&mut self, passage: &str) -> TrainReport {
        let mut report = TrainReport::default();

        for word in tokens(passage) {
            let Some(first) = word.chars().next() else {
                continue;
            };
            match self.roots.route_mut(first) {
                Ok(root) => {
                    if root.insert(&word) == 1 {
                        self.distinct += 1;
                    }
                    report.accepted += 1;
                }
                Err(e) => {
                    log::debug!("Skipping token '{}': {}", word, e);
                    report.skipped += 1;
                }
            }
        }

        log::debug!(
            "Trained {} word(s), skipped {}, {} distinct known",
            report.accepted,
            report.skipped,
            self.distinct
        );
        report
    }

    /// Trains on every line of `reader`.
    pub fn train_reader<R: BufRead>(&mut self, reader: R) -> Result<TrainReport> {
        let mut report = TrainReport::default();
        for (number, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", number + 1))?;
            report.merge(self.train(&line));
        }
        Ok(report)
    }

    /// Returns the known words starting with `fragment`, most frequent first.
    ///
    /// Ties on likelihood are broken alphabetically. Fails only when the
    /// normalized fragment begins with a character that has no root.
    pub fn suggest(&self, fragment: &str) -> Result<Vec<Candidate>, AutocompleteError> {
        let prefix = normalize(fragment);
        let Some(first) = prefix.chars().next() else {
            return Ok(Vec::new());
        };

        let root = self.roots.route(first)?;
        let mut candidates = root.find_candidates(&prefix);
        rank(&mut candidates);

        log::trace!("'{}' matched {} candidate(s)", prefix, candidates.len());
        Ok(candidates)
    }

    /// Exact occurrence count for `word`, or 0 if it was never trained.
    pub fn occurrences(&self, word: &str) -> u32 {
        let word = normalize(word);
        word.chars()
            .next()
            .and_then(|first| self.roots.route(first).ok())
            .and_then(|root| root.locate(&word))
            .map_or(0, |node| node.occurrences())
    }

    /// Number of distinct words trained so far.
    pub fn len(&self) -> usize {
        self.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }
}

impl AutocompleteProvider for AutocompleteEngine {
    fn train(&mut self, passage: &str) {
        AutocompleteEngine::train(self, passage);
    }

    fn get_suggestions(&self, fragment: Option<&str>) -> Result<Vec<Candidate>, AutocompleteError> {
        match fragment {
            Some(fragment) => self.suggest(fragment),
            None => Ok(Vec::new()),
        }
    }
}

/// Orders candidates by likelihood descending, then suggestion ascending.
///
/// Two stable passes: alphabetical first, so the frequency pass keeps
/// alphabetical order among equal counts.
fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.suggestion.cmp(&b.suggestion));
    candidates.sort_by(|a, b| b.likelihood.cmp(&a.likelihood));
}
