//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::application::services::{DEFAULT_CATALOG_LIMIT, DEFAULT_ROUND_SIZE};

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the creature listing endpoint
    pub pokeapi_base_url: String,
    /// Base URL under which `{id}.svg` artwork is served
    pub sprite_base_url: String,
    /// Number of catalog entries requested per pool load
    pub catalog_limit: u32,
    /// Options offered per round
    pub round_size: usize,
    /// Timeout applied to every catalog request
    pub http_timeout_secs: u64,
    /// Sessions not touched for this long are discarded
    pub session_idle_secs: u64,
    /// How often idle sessions are looked for
    pub session_sweep_secs: u64,

    /// HTTP server port
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            round_size: DEFAULT_ROUND_SIZE,
            http_timeout_secs: 10,
            session_idle_secs: 30 * 60,
            session_sweep_secs: 60,
            server_port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            pokeapi_base_url: env::var("POKEAPI_BASE_URL")
                .unwrap_or(defaults.pokeapi_base_url),
            sprite_base_url: env::var("SPRITE_BASE_URL").unwrap_or(defaults.sprite_base_url),
            catalog_limit: parse_env("CATALOG_LIMIT", defaults.catalog_limit)?,
            round_size: parse_env("ROUND_SIZE", defaults.round_size)?,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            session_idle_secs: parse_env("SESSION_IDLE_SECS", defaults.session_idle_secs)?,
            session_sweep_secs: parse_env("SESSION_SWEEP_SECS", defaults.session_sweep_secs)?,
            server_port: parse_env("SERVER_PORT", defaults.server_port)?,
        };

        anyhow::ensure!(config.round_size >= 1, "ROUND_SIZE must be at least 1");
        anyhow::ensure!(config.catalog_limit >= 1, "CATALOG_LIMIT must be at least 1");
        anyhow::ensure!(config.session_idle_secs >= 1, "SESSION_IDLE_SECS must be at least 1");
        anyhow::ensure!(config.session_sweep_secs >= 1, "SESSION_SWEEP_SECS must be at least 1");
        Ok(config)
    }
}

/// Read and parse `key`, falling back to `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
