use hangman_types::Difficulty;

/// Points removed from the cumulative score on a lost round.
pub const LOSS_PENALTY: u32 = 50;
/// Bonus for a flawless round, reduced per wrong guess.
pub const BASE_TIME_BONUS: u32 = 600;
pub const WRONG_GUESS_COST: u32 = 100;
/// Points per difficulty multiplier step.
pub const DIFFICULTY_STEP: u32 = 100;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score for winning a round: difficulty points plus what is left of
    /// the time bonus after wrong guesses.
    pub fn round_score(difficulty: Difficulty, wrong_guesses: u8) -> u32 {
        let difficulty_points = difficulty.multiplier() * DIFFICULTY_STEP;
        let time_bonus =
            BASE_TIME_BONUS.saturating_sub(u32::from(wrong_guesses) * WRONG_GUESS_COST);
        difficulty_points + time_bonus
    }

    pub fn apply_win(total: u32, difficulty: Difficulty, wrong_guesses: u8) -> u32 {
        total + Self::round_score(difficulty, wrong_guesses)
    }

    /// Losing subtracts a flat penalty, floored at zero.
    pub fn apply_loss(total: u32) -> u32 {
        total.saturating_sub(LOSS_PENALTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flawless_hard_round() {
        // 3 * 100 difficulty points + full 600 bonus
        assert_eq!(ScoringEngine::round_score(Difficulty::Hard, 0), 900);
    }

    #[test]
    fn test_sloppy_easy_round() {
        // 1 * 100 difficulty points + (600 - 5 * 100) bonus
        assert_eq!(ScoringEngine::round_score(Difficulty::Easy, 5), 200);
    }

    #[test]
    fn test_time_bonus_never_negative() {
        assert_eq!(ScoringEngine::round_score(Difficulty::Easy, 6), 100);
        assert_eq!(ScoringEngine::round_score(Difficulty::Easy, 200), 100);
    }

    #[test]
    fn test_apply_win_accumulates() {
        assert_eq!(ScoringEngine::apply_win(250, Difficulty::Medium, 2), 250 + 200 + 400);
    }

    #[test]
    fn test_loss_floors_at_zero() {
        assert_eq!(ScoringEngine::apply_loss(80), 30);
        assert_eq!(ScoringEngine::apply_loss(30), 0);
        assert_eq!(ScoringEngine::apply_loss(0), 0);
    }
}
