//! Application layer - Use cases built on the domain
//!
//! This layer contains:
//! - Ports: interfaces the application requires from external systems
//! - Services: the pool loader and the game session controller
//! - DTOs: serializable views handed to transport adapters

pub mod dto;
pub mod ports;
pub mod services;
