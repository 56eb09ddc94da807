//! Game events - Published by a game session so presentation layers can react
//! without the session knowing how anything is rendered.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Pokemon, PokemonId};
use crate::domain::value_objects::{CelebrationIntensity, GameStatus};

/// Everything a game session announces
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh pool was loaded from the catalog
    PoolRefilled { pool_size: usize },

    /// A new round was drawn; the target stays hidden
    RoundStarted {
        round_number: u32,
        options: Vec<Pokemon>,
        remaining_pool: usize,
    },

    /// A guess resolved the current round
    AnswerResolved {
        status: GameStatus,
        candidate_id: PokemonId,
        correct_answer: Pokemon,
        points_awarded: u32,
        score: u32,
        current_streak: u32,
    },

    /// The round was won and should be celebrated
    Celebrate { intensity: CelebrationIntensity },

    /// Session counters were cleared (best streak kept)
    SessionReset,

    /// Every counter including the best streak was cleared
    StatisticsReset,
}

/// A game event stamped with the time it happened
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub occurred_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: GameEvent,
}

impl SessionEvent {
    pub fn now(event: GameEvent) -> Self {
        Self {
            occurred_at: Utc::now(),
            event,
        }
    }
}
