use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn multiplier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// One playable word from the catalog. `word` must be uppercase A-Z for
/// guess matching to work; the catalog enforces this at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
    pub difficulty: Difficulty,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, hint: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
            difficulty,
        }
    }
}

/// The full state of one round. Created fresh on every new round and
/// mutated only through `GameEngine::guess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub word: String,
    pub hint: String,
    pub difficulty: Difficulty,
    pub guessed_letters: BTreeSet<char>,
    pub correct_letters: BTreeSet<char>,
    pub wrong_guesses: u8,
    pub is_over: bool,
    pub is_win: bool,
}

impl GameState {
    pub fn new(word: impl Into<String>, hint: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
            difficulty,
            guessed_letters: BTreeSet::new(),
            correct_letters: BTreeSet::new(),
            wrong_guesses: 0,
            is_over: false,
            is_win: false,
        }
    }

    pub fn is_letter_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter.to_ascii_uppercase())
    }

    pub fn is_letter_correct(&self, letter: char) -> bool {
        self.correct_letters.contains(&letter.to_ascii_uppercase())
    }

    /// True once every letter of the target word has been guessed.
    pub fn is_word_complete(&self) -> bool {
        self.word.chars().all(|c| self.guessed_letters.contains(&c))
    }

    /// The word with unguessed letters replaced by `_`.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

/// What a single guess did, for the caller to surface as a notification.
/// The engine performs no I/O itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Letter is in the word but the round continues.
    Correct,
    /// Letter is not in the word but guesses remain.
    Incorrect,
    /// The guess completed the word.
    Win { round_score: u32 },
    /// The guess used up the last remaining wrong guess.
    Loss,
    /// Repeat letter, non-letter input, or guess after game over. No state change.
    Ignored,
}
