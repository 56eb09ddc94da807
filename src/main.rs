//! PokeQuiz Engine - Backend for the "guess the Pokémon" quiz game
//!
//! The Engine is the backend server that:
//! - Loads the creature pool from PokeAPI
//! - Runs one in-memory game session per browser tab (rounds, scoring, streaks, levels)
//! - Serves the browser frontend via a REST API
//! - Streams game events (including celebration requests) over WebSocket

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokequiz_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PokeQuiz Engine");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  PokeAPI: {}", config.pokeapi_base_url);
    tracing::info!("  Sprites: {}", config.sprite_base_url);
    tracing::info!(
        "  Catalog limit: {}, round size: {}",
        config.catalog_limit,
        config.round_size
    );
    tracing::info!("  Session idle limit: {}s", config.session_idle_secs);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Application state initialized");

    // Background sweeper for sessions whose tab went away without ending them
    let session_sweeper = {
        let state = state.clone();
        tokio::spawn(async move {
            tracing::info!("Starting idle session sweeper");
            state.run_session_sweeper().await;
        })
    };

    let app = http::create_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server until Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    session_sweeper.abort();
    let sessions = state.sessions.read().await.session_count();
    tracing::info!("Server stopped, discarding {} active sessions", sessions);
    Ok(())
}
