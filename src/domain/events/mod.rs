//! Domain events - Notifications of significant state changes

mod game_events;

pub use game_events::{GameEvent, SessionEvent};
