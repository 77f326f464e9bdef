use hangman_core::{GameEngine, WordCatalog};
use hangman_types::{Difficulty, WordEntry};

/// Creates a test catalog with a known word for every difficulty
pub fn create_test_catalog() -> WordCatalog {
    WordCatalog::new(vec![
        WordEntry::new("SUN", "It rises in the east", Difficulty::Easy),
        WordEntry::new("PLANET", "Orbits a star", Difficulty::Medium),
        WordEntry::new("TELESCOPE", "Makes far things near", Difficulty::Hard),
    ])
}

/// Creates an engine whose current round uses a single known word
pub fn engine_with_word(word: &str, difficulty: Difficulty, initial_score: u32) -> GameEngine {
    let catalog = WordCatalog::new(vec![WordEntry::new(word, "test hint", difficulty)]);
    GameEngine::new(catalog, initial_score, difficulty)
}

/// Guesses every distinct letter of the current word, winning the round
pub fn win_round(engine: &mut GameEngine) {
    let word = engine.state().word.clone();
    for letter in word.chars() {
        engine.guess(letter);
    }
    assert!(engine.state().is_win);
}

/// Burns through six wrong guesses, losing the round
pub fn lose_round(engine: &mut GameEngine) {
    let word = engine.state().word.clone();
    let mut burned = 0;
    for letter in ('A'..='Z').rev() {
        if word.contains(letter) {
            continue;
        }
        engine.guess(letter);
        burned += 1;
        if burned == 6 {
            break;
        }
    }
    assert!(engine.state().is_over && !engine.state().is_win);
}
