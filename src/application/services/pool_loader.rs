//! Pokemon Pool Loader - Fetches and normalizes the creature pool
//!
//! Each call re-fetches the catalog and re-shuffles it; nothing is cached
//! between calls.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, instrument, warn};

use crate::application::ports::outbound::{NamedApiResource, PokemonCatalogPort};
use crate::application::services::GameError;
use crate::domain::entities::{Pokemon, PokemonId};

/// Size of the catalog requested per load (the first generation)
pub const DEFAULT_CATALOG_LIMIT: u32 = 151;

pub struct PokemonPoolLoader {
    catalog: Arc<dyn PokemonCatalogPort>,
    limit: u32,
    rng: StdRng,
}

impl PokemonPoolLoader {
    pub fn new(catalog: Arc<dyn PokemonCatalogPort>, limit: u32) -> Self {
        Self {
            catalog,
            limit,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a deterministic shuffle
    #[cfg(test)]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Fetch the catalog and return its entries in a fresh random order
    #[instrument(skip(self), fields(limit = self.limit))]
    pub async fn load(&mut self) -> Result<Vec<Pokemon>, GameError> {
        let listing = self.catalog.list_pokemon(self.limit).await?;
        let catalog_size = listing.count;

        let mut pool: Vec<Pokemon> = listing.results.into_iter().map(normalize_entry).collect();
        pool.shuffle(&mut self.rng);

        let placeholders = pool.iter().filter(|p| p.id.is_placeholder()).count();
        if placeholders > 1 {
            warn!(placeholders = placeholders, "Several catalog entries share the placeholder id");
        }

        debug!(pool_size = pool.len(), catalog_size = ?catalog_size, "Loaded pokemon pool");
        Ok(pool)
    }
}

/// Recover the numeric id from a locator shaped like `.../pokemon/{id}/`
///
/// The id is the second-to-last `/`-separated segment.
pub fn extract_pokemon_id(url: &str) -> Option<PokemonId> {
    let segments: Vec<&str> = url.split('/').collect();
    let index = segments.len().checked_sub(2)?;
    segments[index].parse::<u32>().ok().map(PokemonId::new)
}

fn normalize_entry(entry: NamedApiResource) -> Pokemon {
    let id = extract_pokemon_id(&entry.url).unwrap_or_else(|| {
        warn!(
            name = %entry.name,
            url = %entry.url,
            "Could not parse pokemon id, using placeholder"
        );
        PokemonId::PLACEHOLDER
    });
    Pokemon::new(id, entry.name)
}
