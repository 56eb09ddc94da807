//! Outbound ports - Interfaces that the application requires from external systems

mod pokemon_catalog_port;

pub use pokemon_catalog_port::{
    CatalogError, NamedApiResource, PokemonCatalogPort, PokemonListResponse,
};

#[cfg(test)]
pub(crate) use pokemon_catalog_port::mock;
