//! Application services - Use case implementations
//!
//! The pool loader turns the remote catalog into a shuffled pool of
//! Pokemon; the game session owns the pool and runs rounds and scoring on
//! top of it.

pub mod game_error;
pub mod game_session;
pub mod pool_loader;

pub use game_error::{GameError, PreconditionViolation};
pub use game_session::{GameSession, DEFAULT_ROUND_SIZE};
pub use pool_loader::{PokemonPoolLoader, DEFAULT_CATALOG_LIMIT};
