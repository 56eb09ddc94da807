//! Session statistics and the scoring law
//!
//! Counters are only mutated through the `record_*` and `reset_*` methods so
//! that `best_streak >= current_streak` and `correct_answers <= total_questions`
//! hold after every call.

use serde::{Deserialize, Serialize};

/// Points awarded for any correct answer
pub const BASE_POINTS: u32 = 10;
/// Upper bound on the streak bonus added to `BASE_POINTS`
pub const MAX_STREAK_BONUS: u32 = 10;
/// Score span of a single level
pub const POINTS_PER_LEVEL: u32 = 100;
/// Streak from which a win is celebrated with high intensity
pub const HIGH_CELEBRATION_STREAK: u32 = 5;

/// Points earned by a correct answer that brings the streak to `streak`
pub fn points_for_streak(streak: u32) -> u32 {
    if streak > 1 {
        BASE_POINTS + (streak - 1).min(MAX_STREAK_BONUS)
    } else {
        BASE_POINTS
    }
}

/// Scoring, streak and level counters of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatistics {
    pub score: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub round_number: u32,
}

impl Default for SessionStatistics {
    fn default() -> Self {
        Self {
            score: 0,
            current_streak: 0,
            best_streak: 0,
            total_questions: 0,
            correct_answers: 0,
            round_number: 1,
        }
    }
}

impl SessionStatistics {
    /// Record a correct answer and return the points it earned
    pub fn record_correct(&mut self) -> u32 {
        self.total_questions += 1;
        self.correct_answers += 1;
        self.current_streak += 1;

        let points = points_for_streak(self.current_streak);
        self.score += points;
        self.best_streak = self.best_streak.max(self.current_streak);
        points
    }

    /// Record a wrong answer; the score is left alone
    pub fn record_incorrect(&mut self) {
        self.total_questions += 1;
        self.current_streak = 0;
    }

    /// Mark the start of another round
    pub fn advance_round(&mut self) {
        self.round_number += 1;
    }

    /// Clear the per-session counters, keeping the best streak
    pub fn reset_session(&mut self) {
        *self = Self {
            best_streak: self.best_streak,
            ..Self::default()
        };
    }

    /// Clear every counter including the best streak
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Percentage of correct answers, rounded; `0` before the first answer
    pub fn accuracy(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0).round() as u32
    }

    pub fn current_level(&self) -> u32 {
        self.score / POINTS_PER_LEVEL + 1
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.current_level() * POINTS_PER_LEVEL - self.score
    }

    /// Progress through the current level, 0..=99
    pub fn progress_percentage(&self) -> u32 {
        let level_floor = (self.current_level() - 1) * POINTS_PER_LEVEL;
        let progress = self.score - level_floor;
        (f64::from(progress) / f64::from(POINTS_PER_LEVEL) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_score(score: u32) -> SessionStatistics {
        SessionStatistics {
            score,
            ..SessionStatistics::default()
        }
    }

    #[test]
    fn test_points_for_streak() {
        assert_eq!(points_for_streak(1), 10);
        assert_eq!(points_for_streak(2), 11);
        assert_eq!(points_for_streak(5), 14);
        assert_eq!(points_for_streak(11), 20);
        // Bonus is capped
        assert_eq!(points_for_streak(30), 20);
    }

    #[test]
    fn test_scoring_law() {
        let mut stats = SessionStatistics::default();

        assert_eq!(stats.record_correct(), 10);
        assert_eq!(stats.score, 10);

        assert_eq!(stats.record_correct(), 11);
        assert_eq!(stats.score, 21);
        assert_eq!(stats.current_streak, 2);

        stats.record_incorrect();
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.score, 21);
        assert_eq!(stats.total_questions, 3);
        assert_eq!(stats.correct_answers, 2);

        // Streak restarts at base points after a miss
        assert_eq!(stats.record_correct(), 10);
        assert_eq!(stats.score, 31);
    }

    #[test]
    fn test_level_law() {
        let fresh = with_score(0);
        assert_eq!(fresh.current_level(), 1);
        assert_eq!(fresh.points_to_next_level(), 100);
        assert_eq!(fresh.progress_percentage(), 0);

        let mid = with_score(150);
        assert_eq!(mid.current_level(), 2);
        assert_eq!(mid.points_to_next_level(), 50);
        assert_eq!(mid.progress_percentage(), 50);

        let boundary = with_score(100);
        assert_eq!(boundary.current_level(), 2);
        assert_eq!(boundary.points_to_next_level(), 100);
        assert_eq!(boundary.progress_percentage(), 0);

        let almost = with_score(299);
        assert_eq!(almost.current_level(), 3);
        assert_eq!(almost.points_to_next_level(), 1);
        assert_eq!(almost.progress_percentage(), 99);
    }

    #[test]
    fn test_accuracy() {
        let mut stats = SessionStatistics::default();
        assert_eq!(stats.accuracy(), 0);

        stats.record_correct();
        stats.record_incorrect();
        stats.record_incorrect();
        // 1 / 3 rounds to 33
        assert_eq!(stats.accuracy(), 33);

        stats.record_correct();
        stats.record_correct();
        // 3 / 5
        assert_eq!(stats.accuracy(), 60);

        // Derived values are stable without mutation
        assert_eq!(stats.accuracy(), stats.accuracy());
        assert_eq!(stats.current_level(), stats.current_level());
    }

    #[test]
    fn test_accuracy_rounds_half_up() {
        let mut stats = SessionStatistics::default();
        stats.record_correct();
        for _ in 0..7 {
            stats.record_incorrect();
        }
        // 1 / 8 = 12.5
        assert_eq!(stats.accuracy(), 13);
    }

    #[test]
    fn test_invariants_hold_over_mixed_answers() {
        let mut stats = SessionStatistics::default();
        let pattern = [true, true, false, true, true, true, false, false, true];

        for correct in pattern {
            if correct {
                stats.record_correct();
            } else {
                stats.record_incorrect();
            }
            assert!(stats.best_streak >= stats.current_streak);
            assert!(stats.correct_answers <= stats.total_questions);
        }
        assert_eq!(stats.best_streak, 3);
    }

    #[test]
    fn test_reset_session_keeps_best_streak() {
        let mut stats = SessionStatistics::default();
        stats.record_correct();
        stats.record_correct();
        stats.advance_round();
        stats.advance_round();

        stats.reset_session();

        assert_eq!(stats.score, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.total_questions, 0);
        assert_eq!(stats.correct_answers, 0);
        assert_eq!(stats.round_number, 1);
        assert_eq!(stats.best_streak, 2);

        stats.reset_all();
        assert_eq!(stats, SessionStatistics::default());
    }
}
