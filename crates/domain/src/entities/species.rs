//! Species-level data (shared by every form of a Pokémon).

use serde::{Deserialize, Serialize};

/// `gender_rate` value the API uses for genderless species.
pub const GENDERLESS_RATE: i32 = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    pub url: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub capture_rate: u32,
    pub base_happiness: u32,
    pub growth_rate: String,
    pub habitat: Option<String>,
    pub egg_groups: Vec<String>,
    /// Chance of being female in eighths, or [`GENDERLESS_RATE`].
    pub gender_rate: i32,
    /// API slug such as `generation-i`.
    pub generation: String,
}

impl PokemonSpecies {
    /// `generation-iv` → `GEN IV`.
    pub fn formatted_generation(&self) -> String {
        let numeral = self
            .generation
            .strip_prefix("generation-")
            .unwrap_or(&self.generation);
        format!("GEN {}", numeral.to_uppercase())
    }

    /// Male/female split, e.g. `88% ♂  12% ♀`.
    pub fn gender_ratio(&self) -> String {
        if self.gender_rate == GENDERLESS_RATE {
            return "Genderless".to_string();
        }
        let female = (f64::from(self.gender_rate) / 8.0 * 100.0) as i32;
        let male = 100 - female;
        format!("{}% ♂  {}% ♀", male, female)
    }
}
