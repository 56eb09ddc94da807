//! Domain layer - Core game rules with no external dependencies
//!
//! This layer contains:
//! - Entities: Pokemon
//! - Value Objects: identifiers, game status, session statistics and the scoring law
//! - Domain Events: notifications emitted by a game session

pub mod entities;
pub mod events;
pub mod value_objects;
