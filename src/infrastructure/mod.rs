//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - PokeAPI: HTTP client for the remote creature catalog
//! - Config: Application configuration
//! - Session: Registry of active game sessions
//! - HTTP: REST API routes
//! - WebSocket: Game event stream for browser clients
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod pokeapi;
pub mod session;
pub mod state;
pub mod websocket;
