use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

use hangman_types::{Difficulty, WordEntry};

/// The fixed, read-only set of playable words for this process.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    /// Validate externally supplied entries at the load boundary. Entries
    /// that are not uppercase A-Z are dropped; an empty result falls back
    /// to the built-in list so the catalog is never empty.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let entries: Vec<WordEntry> = entries
            .into_iter()
            .filter(|entry| {
                if Self::is_playable(&entry.word) {
                    true
                } else {
                    warn!(word = %entry.word, "dropping unplayable catalog entry");
                    false
                }
            })
            .collect();

        if entries.is_empty() {
            warn!("word catalog empty after validation, using built-in list");
            return Self::builtin();
        }

        Self { entries }
    }

    /// The word list shipped with the game.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                WordEntry::new("CAT", "A common household pet", Difficulty::Easy),
                WordEntry::new("DOG", "Man's best friend", Difficulty::Easy),
                WordEntry::new(
                    "REACT",
                    "A popular JavaScript library for building user interfaces",
                    Difficulty::Medium,
                ),
                WordEntry::new("TYPESCRIPT", "A typed superset of JavaScript", Difficulty::Hard),
                WordEntry::new(
                    "JAVASCRIPT",
                    "The programming language of the web",
                    Difficulty::Hard,
                ),
                WordEntry::new(
                    "PROGRAMMING",
                    "The process of creating computer software",
                    Difficulty::Hard,
                ),
                WordEntry::new(
                    "COMPUTER",
                    "An electronic device that processes data",
                    Difficulty::Medium,
                ),
                WordEntry::new("DEVELOPER", "Someone who creates software", Difficulty::Medium),
                WordEntry::new(
                    "INTERFACE",
                    "A point of interaction between components",
                    Difficulty::Medium,
                ),
                WordEntry::new(
                    "APPLICATION",
                    "A software program designed for end users",
                    Difficulty::Hard,
                ),
            ],
        }
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<WordEntry> = serde_json::from_str(data)?;
        Ok(Self::new(entries))
    }

    /// Load a catalog file, falling back to the built-in list when the
    /// file is missing, unreadable, or unparsable. Never fails.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => match Self::from_json(&data) {
                Ok(catalog) => {
                    info!(path = %path.display(), words = catalog.len(), "loaded word catalog");
                    catalog
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "word catalog unparsable, using built-in list");
                    Self::builtin()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "word catalog unreadable, using built-in list");
                Self::builtin()
            }
        }
    }

    pub fn is_playable(word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
    }

    /// Pick a word uniformly at random among entries of the requested
    /// difficulty. A difficulty with no words falls back to the first
    /// catalog entry rather than failing.
    pub fn pick<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> &WordEntry {
        let matching: Vec<&WordEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.difficulty == difficulty)
            .collect();

        matching.choose(rng).copied().unwrap_or(&self.entries[0])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}
