use serde::Serialize;

use crate::domain::entities::Pokemon;
use crate::domain::value_objects::{CelebrationIntensity, GameStatus, SessionStatistics};

/// Counters plus the derived statistics, recomputed when built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsDto {
    pub score: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub round_number: u32,
    pub accuracy: u32,
    pub current_level: u32,
    pub points_to_next_level: u32,
    pub progress_percentage: u32,
}

impl From<&SessionStatistics> for StatisticsDto {
    fn from(stats: &SessionStatistics) -> Self {
        Self {
            score: stats.score,
            current_streak: stats.current_streak,
            best_streak: stats.best_streak,
            total_questions: stats.total_questions,
            correct_answers: stats.correct_answers,
            round_number: stats.round_number,
            accuracy: stats.accuracy(),
            current_level: stats.current_level(),
            points_to_next_level: stats.points_to_next_level(),
            progress_percentage: stats.progress_percentage(),
        }
    }
}

/// Read-only view of a game session
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub is_loading: bool,
    pub remaining_pool: usize,
    pub options: Vec<Pokemon>,
    /// Artwork of the Pokemon to guess
    pub picture_url: Option<String>,
    /// Only present once the round is resolved
    pub revealed_answer: Option<Pokemon>,
    pub statistics: StatisticsDto,
}

/// Result of a single guess
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOutcome {
    pub status: GameStatus,
    pub points_awarded: u32,
    pub correct_answer: Pokemon,
    pub celebration: Option<CelebrationIntensity>,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        self.status == GameStatus::Won
    }
}
