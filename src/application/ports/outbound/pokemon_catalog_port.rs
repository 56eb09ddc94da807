//! Pokemon catalog port - Interface to the remote creature listing
//!
//! Only the `name` and `url` of each listed entry are consumed; the paging
//! fields are carried for completeness.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One entry of a listing: display name plus the resource locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// A page of the creature listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub count: Option<u32>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Data format error: {0}")]
    DataFormat(String),
}

/// Port for listing creatures from the remote catalog
#[async_trait]
pub trait PokemonCatalogPort: Send + Sync {
    /// Fetch the first `limit` entries of the catalog
    async fn list_pokemon(&self, limit: u32) -> Result<PokemonListResponse, CatalogError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;

    /// In-memory catalog that counts calls and can be switched into failure
    pub struct MockCatalog {
        results: Vec<NamedApiResource>,
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl MockCatalog {
        /// Catalog listing `names` with ids 1..=n in order
        pub fn with_names(names: &[&str]) -> Self {
            let results = names
                .iter()
                .enumerate()
                .map(|(index, name)| NamedApiResource {
                    name: name.to_string(),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{}/", index + 1),
                })
                .collect();
            Self::with_results(results)
        }

        pub fn with_results(results: Vec<NamedApiResource>) -> Self {
            Self {
                results,
                calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            }
        }

        /// The first four entries of the national Pokedex
        pub fn starters() -> Self {
            Self::with_names(&["bulbasaur", "ivysaur", "venusaur", "charmander"])
        }

        pub fn failing() -> Self {
            let catalog = Self::starters();
            catalog.set_failing(true);
            catalog
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PokemonCatalogPort for MockCatalog {
        async fn list_pokemon(&self, limit: u32) -> Result<PokemonListResponse, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(CatalogError::Network("connection refused".to_string()));
            }
            Ok(PokemonListResponse {
                count: Some(self.results.len() as u32),
                next: None,
                previous: None,
                results: self.results.iter().take(limit as usize).cloned().collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon/?offset=20&limit=20",
            "previous": null,
            "results": [
                { "name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/" }
            ]
        }"#;

        let listing: PokemonListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(listing.count, Some(1302));
        assert!(listing.next.unwrap().contains("pokeapi.co"));
        assert!(listing.previous.is_none());
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.results[0].name, "pikachu");
        assert_eq!(listing.results[0].url, "https://pokeapi.co/api/v2/pokemon/25/");
    }

    #[test]
    fn test_listing_tolerates_missing_paging_fields() {
        let listing: PokemonListResponse = serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert!(listing.count.is_none());
        assert!(listing.results.is_empty());
    }

    #[test]
    fn test_listing_without_results_is_rejected() {
        let parsed = serde_json::from_str::<PokemonListResponse>(r#"{ "count": 151 }"#);
        assert!(parsed.is_err());
    }
}
