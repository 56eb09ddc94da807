//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::outbound::PokemonCatalogPort;
use crate::application::services::{GameSession, PokemonPoolLoader};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::pokeapi::PokeApiClient;
use crate::infrastructure::session::SessionManager;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<dyn PokemonCatalogPort>,
    /// Active game sessions
    pub sessions: RwLock<SessionManager>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = PokeApiClient::new(
            &config.pokeapi_base_url,
            Duration::from_secs(config.http_timeout_secs),
        )?;
        tracing::debug!("PokeAPI client ready for {}", client.base_url());
        Ok(Self::with_catalog(config, Arc::new(client)))
    }

    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn PokemonCatalogPort>) -> Self {
        Self {
            config,
            catalog,
            sessions: RwLock::new(SessionManager::new()),
        }
    }

    /// Build an unstarted game session wired to the shared catalog
    pub fn new_game_session(&self) -> GameSession {
        let loader = PokemonPoolLoader::new(self.catalog.clone(), self.config.catalog_limit);
        GameSession::new(loader).with_round_size(self.config.round_size)
    }

    /// Discard sessions idle for longer than the configured limit
    pub async fn expire_idle_sessions(&self) -> usize {
        let max_idle = Duration::from_secs(self.config.session_idle_secs);
        self.sessions.write().await.remove_idle(max_idle, Utc::now())
    }

    /// Periodically expire idle sessions; never returns
    pub async fn run_session_sweeper(&self) {
        let mut ticker =
            tokio::time::interval(Duration::from_secs(self.config.session_sweep_secs));
        loop {
            ticker.tick().await;
            let expired = self.expire_idle_sessions().await;
            if expired > 0 {
                tracing::info!("Expired {} idle game sessions", expired);
            }
        }
    }
}
