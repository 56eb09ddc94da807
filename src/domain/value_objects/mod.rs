//! Value objects - Immutable objects defined by their attributes

mod game_status;
mod ids;
mod statistics;

pub use game_status::{CelebrationIntensity, GameStatus};
pub use ids::*;
pub use statistics::SessionStatistics;
