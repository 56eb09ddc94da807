//! Pokemon entity - A creature that can appear as a quiz option

use serde::{Deserialize, Serialize};

/// Numeric Pokedex identifier
///
/// Real identifiers are always positive. `0` is reserved as the placeholder
/// used when an identifier cannot be recovered from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(u32);

impl PokemonId {
    pub const PLACEHOLDER: Self = Self(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PokemonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A creature offered as an answer option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
}

impl Pokemon {
    pub fn new(id: impl Into<PokemonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Build the artwork URL for this Pokemon under the given sprite base
    pub fn sprite_url(&self, sprite_base: &str) -> String {
        format!("{}/{}.svg", sprite_base.trim_end_matches('/'), self.id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DREAM_WORLD: &str =
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world";

    #[test]
    fn test_sprite_url() {
        let mewtwo = Pokemon::new(150, "mewtwo");
        assert_eq!(mewtwo.sprite_url(DREAM_WORLD), format!("{}/150.svg", DREAM_WORLD));

        // Trailing slash on the base must not double up
        let bulbasaur = Pokemon::new(1, "bulbasaur");
        assert_eq!(
            bulbasaur.sprite_url(&format!("{}/", DREAM_WORLD)),
            format!("{}/1.svg", DREAM_WORLD)
        );
    }

    #[test]
    fn test_placeholder_id() {
        assert!(PokemonId::PLACEHOLDER.is_placeholder());
        assert!(!PokemonId::new(25).is_placeholder());
        assert_eq!(PokemonId::from(25).value(), 25);
    }

    #[test]
    fn test_pokemon_serializes_as_plain_record() {
        let pikachu = Pokemon::new(25, "pikachu");
        let json = serde_json::to_value(&pikachu).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 25, "name": "pikachu" }));
    }
}
