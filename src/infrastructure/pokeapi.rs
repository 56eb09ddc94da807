//! PokeAPI client for the creature catalog

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::application::ports::outbound::{CatalogError, PokemonCatalogPort, PokemonListResponse};

/// Client for the PokeAPI listing endpoint
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PokeApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_request(&self, limit: u32) -> RequestBuilder {
        self.client
            .get(format!("{}/", self.base_url))
            .query(&[("limit", limit)])
    }

    /// Fetch the first `limit` Pokemon of the catalog
    pub async fn get_pokemon_list(&self, limit: u32) -> Result<PokemonListResponse, PokeApiError> {
        let response = self.list_request(limit).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PokeApiError::ApiError { status, body });
        }

        let body = response.text().await?;
        let listing: PokemonListResponse = serde_json::from_str(&body)?;
        tracing::debug!("Fetched {} catalog entries", listing.results.len());
        Ok(listing)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PokeApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },
    #[error("Invalid listing body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl From<PokeApiError> for CatalogError {
    fn from(error: PokeApiError) -> Self {
        match error {
            PokeApiError::HttpError(e) if e.is_decode() => Self::DataFormat(e.to_string()),
            PokeApiError::InvalidBody(e) => Self::DataFormat(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

// =============================================================================
// PokemonCatalogPort Implementation
// =============================================================================

#[async_trait]
impl PokemonCatalogPort for PokeApiClient {
    async fn list_pokemon(&self, limit: u32) -> Result<PokemonListResponse, CatalogError> {
        let listing = self.get_pokemon_list(limit).await?;
        Ok(listing)
    }
}
