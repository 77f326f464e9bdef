use tracing::debug;

use hangman_types::{Difficulty, GameState, GuessOutcome};

use crate::{ScoringEngine, WordCatalog};

/// Reaching this many wrong guesses ends the round as a loss.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// The lifecycle of one round at a time: word selection, letter-guess
/// evaluation, win/loss detection, and the cumulative score. Performs no
/// I/O; the caller forwards terminal scores to the profile store.
#[derive(Debug)]
pub struct GameEngine {
    catalog: WordCatalog,
    state: GameState,
    total_score: u32,
}

impl GameEngine {
    /// Starts the first round immediately, seeded with the cumulative
    /// score of whoever is logged in (zero for guest play).
    pub fn new(catalog: WordCatalog, initial_score: u32, difficulty: Difficulty) -> Self {
        let state = fresh_round(&catalog, difficulty);
        Self {
            catalog,
            state,
            total_score: initial_score,
        }
    }

    /// Replace the current round wholesale. Callable at any time; an
    /// abandoned round has no effect on the score.
    pub fn start_round(&mut self, difficulty: Difficulty) {
        self.state = fresh_round(&self.catalog, difficulty);
    }

    /// Evaluate a single letter guess. Repeat letters, non-letter input,
    /// and guesses after game over are ignored without mutating anything.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();
        if self.state.is_over
            || !letter.is_ascii_uppercase()
            || self.state.guessed_letters.contains(&letter)
        {
            return GuessOutcome::Ignored;
        }

        self.state.guessed_letters.insert(letter);

        if self.state.word.contains(letter) {
            self.state.correct_letters.insert(letter);
            if self.state.is_word_complete() {
                let round_score =
                    ScoringEngine::round_score(self.state.difficulty, self.state.wrong_guesses);
                self.total_score += round_score;
                self.state.is_over = true;
                self.state.is_win = true;
                debug!(round_score, total = self.total_score, "round won");
                GuessOutcome::Win { round_score }
            } else {
                GuessOutcome::Correct
            }
        } else {
            self.state.wrong_guesses += 1;
            if self.state.wrong_guesses >= MAX_WRONG_GUESSES {
                self.total_score = ScoringEngine::apply_loss(self.total_score);
                self.state.is_over = true;
                debug!(total = self.total_score, "round lost");
                GuessOutcome::Loss
            } else {
                GuessOutcome::Incorrect
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Re-seed the cumulative score, used when the active profile changes.
    pub fn set_total_score(&mut self, score: u32) {
        self.total_score = score;
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }
}

fn fresh_round(catalog: &WordCatalog, difficulty: Difficulty) -> GameState {
    let entry = catalog.pick(difficulty, &mut rand::rng());
    debug!(difficulty = %entry.difficulty, word_len = entry.word.len(), "starting new round");
    GameState::new(entry.word.clone(), entry.hint.clone(), entry.difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_types::WordEntry;

    fn engine_with_word(word: &str, difficulty: Difficulty) -> GameEngine {
        let catalog = WordCatalog::new(vec![WordEntry::new(word, "test hint", difficulty)]);
        GameEngine::new(catalog, 0, difficulty)
    }

    fn check_invariants(engine: &GameEngine) {
        let state = engine.state();
        assert!(state.correct_letters.is_subset(&state.guessed_letters));
        assert_eq!(
            usize::from(state.wrong_guesses),
            state.guessed_letters.len() - state.correct_letters.len()
        );
        assert!(state.wrong_guesses <= MAX_WRONG_GUESSES);
    }

    #[test]
    fn test_correct_guess_reveals_letter() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        assert_eq!(engine.guess('c'), GuessOutcome::Correct);
        assert!(engine.state().is_letter_correct('C'));
        assert_eq!(engine.state().masked_word(), "C__");
        check_invariants(&engine);
    }

    #[test]
    fn test_wrong_guess_increments_count() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        assert_eq!(engine.guess('Z'), GuessOutcome::Incorrect);
        assert_eq!(engine.state().wrong_guesses, 1);
        assert!(!engine.state().is_over);
        check_invariants(&engine);
    }

    #[test]
    fn test_win_on_full_cover_any_order() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        assert_eq!(engine.guess('T'), GuessOutcome::Correct);
        assert_eq!(engine.guess('A'), GuessOutcome::Correct);
        assert_eq!(engine.guess('C'), GuessOutcome::Win { round_score: 700 });
        assert!(engine.state().is_over);
        assert!(engine.state().is_win);
        check_invariants(&engine);
    }

    #[test]
    fn test_win_scores_exactly_once() {
        let mut engine = engine_with_word("CAT", Difficulty::Hard);

        engine.guess('C');
        engine.guess('A');
        engine.guess('T');
        assert_eq!(engine.total_score(), 900);

        // Terminal state rejects further guesses and never re-scores.
        assert_eq!(engine.guess('B'), GuessOutcome::Ignored);
        assert_eq!(engine.total_score(), 900);
    }

    #[test]
    fn test_sixth_wrong_guess_loses() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);
        engine.set_total_score(30);

        for (i, letter) in ['B', 'D', 'E', 'F', 'G'].into_iter().enumerate() {
            assert_eq!(engine.guess(letter), GuessOutcome::Incorrect);
            assert_eq!(engine.state().wrong_guesses, i as u8 + 1);
        }
        assert_eq!(engine.guess('H'), GuessOutcome::Loss);
        assert!(engine.state().is_over);
        assert!(!engine.state().is_win);
        // 30 - 50 floors at zero
        assert_eq!(engine.total_score(), 0);
        check_invariants(&engine);
    }

    #[test]
    fn test_repeat_guess_is_ignored() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        engine.guess('Z');
        let before = engine.state().clone();

        assert_eq!(engine.guess('Z'), GuessOutcome::Ignored);
        assert_eq!(engine.guess('z'), GuessOutcome::Ignored);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_guess_after_game_over_is_ignored() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        for letter in ['B', 'D', 'E', 'F', 'G', 'H'] {
            engine.guess(letter);
        }
        assert!(engine.state().is_over);
        let before = engine.state().clone();

        assert_eq!(engine.guess('C'), GuessOutcome::Ignored);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_non_letter_input_is_ignored() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        assert_eq!(engine.guess('3'), GuessOutcome::Ignored);
        assert_eq!(engine.guess(' '), GuessOutcome::Ignored);
        assert!(engine.state().guessed_letters.is_empty());
    }

    #[test]
    fn test_lowercase_input_is_normalized() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        assert_eq!(engine.guess('a'), GuessOutcome::Correct);
        assert!(engine.state().is_letter_guessed('A'));
        assert!(engine.state().is_letter_guessed('a'));
    }

    #[test]
    fn test_start_round_abandons_without_scoring() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);
        engine.set_total_score(500);

        engine.guess('Z');
        engine.start_round(Difficulty::Easy);

        assert_eq!(engine.total_score(), 500);
        assert!(engine.state().guessed_letters.is_empty());
        assert_eq!(engine.state().wrong_guesses, 0);
        assert!(!engine.state().is_over);
    }

    #[test]
    fn test_wrong_guesses_reduce_round_score() {
        let mut engine = engine_with_word("CAT", Difficulty::Easy);

        engine.guess('Z');
        engine.guess('X');
        engine.guess('C');
        engine.guess('A');
        let outcome = engine.guess('T');

        // 100 difficulty points + (600 - 2 * 100) bonus
        assert_eq!(outcome, GuessOutcome::Win { round_score: 500 });
    }
}
