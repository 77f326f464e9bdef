use std::env;
use std::path::PathBuf;

use hangman_types::Difficulty;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted profile catalog and session.
    pub data_dir: PathBuf,
    /// Optional external word catalog; the built-in list is used otherwise.
    pub words_file: Option<PathBuf>,
    /// Difficulty of the first round.
    pub difficulty: Difficulty,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("HANGMAN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".hangman")),
            words_file: env::var("HANGMAN_WORDS_FILE").ok().map(PathBuf::from),
            // Malformed values fall back to the default rather than failing
            difficulty: env::var("HANGMAN_DIFFICULTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Difficulty::Medium),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
