//! Data transfer objects handed to transport adapters

mod game_snapshot;

pub use game_snapshot::{AnswerOutcome, GameSnapshot, StatisticsDto};
