//! Pokémon aggregate and its nested value records.

use serde::{Deserialize, Serialize};

use crate::common::{capitalize, title_case_slug};
use crate::entities::{EvolutionStage, PokemonSpecies};

/// Upper bound used to scale stat bars.
pub const MAX_BASE_STAT: u32 = 255;

/// Fallback type color for names outside the table.
const UNKNOWN_TYPE_COLOR: &str = "#68A090";

// ============================================================================
// Pokemon
// ============================================================================

/// A Pokémon as shown by the app.
///
/// List pages produce a minimal record (id, name, artwork only); the detail
/// fetch fills in everything else. `species`, `description` and
/// `evolution_chain` stay at their defaults when the secondary fetches fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub base_experience: u32,
    pub order: i32,
    pub sprites: PokemonSprites,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    pub species: Option<PokemonSpecies>,
    pub description: String,
    pub evolution_chain: Vec<EvolutionStage>,
}

impl Pokemon {
    /// Minimal record built from a list entry.
    pub fn summary(id: u32, name: impl Into<String>, artwork_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            height: 0,
            weight: 0,
            base_experience: 0,
            order: 0,
            sprites: PokemonSprites {
                official_artwork: Some(artwork_url.into()),
                ..PokemonSprites::default()
            },
            stats: Vec::new(),
            types: Vec::new(),
            abilities: Vec::new(),
            species: None,
            description: String::new(),
            evolution_chain: Vec::new(),
        }
    }

    pub fn height_in_meters(&self) -> String {
        format!("{:.1} m", f64::from(self.height) / 10.0)
    }

    pub fn weight_in_kilograms(&self) -> String {
        format!("{:.1} kg", f64::from(self.weight) / 10.0)
    }

    pub fn formatted_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Dex number as `#001`.
    pub fn pokemon_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn primary_type(&self) -> Option<&PokemonType> {
        self.types.first()
    }

    pub fn is_legendary(&self) -> bool {
        self.species.as_ref().is_some_and(|s| s.is_legendary)
    }

    pub fn is_mythical(&self) -> bool {
        self.species.as_ref().is_some_and(|s| s.is_mythical)
    }
}

// ============================================================================
// Sprites
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
}

impl PokemonSprites {
    /// Official artwork when available, otherwise the front sprite.
    pub fn primary_image(&self) -> Option<&str> {
        self.official_artwork
            .as_deref()
            .or(self.front_default.as_deref())
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: StatInfo,
}

impl PokemonStat {
    /// Fill ratio of a stat bar, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.base_stat as f32 / MAX_BASE_STAT as f32).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatInfo {
    pub name: String,
    pub url: String,
}

impl StatInfo {
    pub fn display_name(&self) -> String {
        match self.name.as_str() {
            "hp" => "HP".to_string(),
            "attack" => "Attack".to_string(),
            "defense" => "Defense".to_string(),
            "special-attack" => "Sp. Attack".to_string(),
            "special-defense" => "Sp. Defense".to_string(),
            "speed" => "Speed".to_string(),
            other => capitalize(other),
        }
    }
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    pub r#type: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    pub url: String,
}

impl TypeInfo {
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Badge color for the type.
    pub fn color_hex(&self) -> &'static str {
        match self.name.as_str() {
            "normal" => "#A8A878",
            "fire" => "#F08030",
            "water" => "#6890F0",
            "electric" => "#F8D030",
            "grass" => "#78C850",
            "ice" => "#98D8D8",
            "fighting" => "#C03028",
            "poison" => "#A040A0",
            "ground" => "#E0C068",
            "flying" => "#A890F0",
            "psychic" => "#F85888",
            "bug" => "#A8B820",
            "rock" => "#B8A038",
            "ghost" => "#705898",
            "dragon" => "#7038F8",
            "dark" => "#705848",
            "steel" => "#B8B8D0",
            "fairy" => "#EE99AC",
            _ => UNKNOWN_TYPE_COLOR,
        }
    }
}

// ============================================================================
// Abilities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: u32,
    pub ability: AbilityInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityInfo {
    pub name: String,
    pub url: String,
}

impl AbilityInfo {
    pub fn display_name(&self) -> String {
        title_case_slug(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, base_stat: u32) -> PokemonStat {
        PokemonStat {
            base_stat,
            effort: 0,
            stat: StatInfo {
                name: name.to_string(),
                url: String::new(),
            },
        }
    }

    fn type_info(name: &str) -> TypeInfo {
        TypeInfo {
            name: name.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn summary_has_only_artwork() {
        let pokemon = Pokemon::summary(1, "bulbasaur", "https://img/1.png");

        assert_eq!(pokemon.sprites.primary_image(), Some("https://img/1.png"));
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.species.is_none());
        assert!(pokemon.evolution_chain.is_empty());
        assert_eq!(pokemon.description, "");
    }

    #[test]
    fn physical_attributes_are_formatted_in_metric() {
        let mut pokemon = Pokemon::summary(25, "pikachu", "");
        pokemon.height = 4;
        pokemon.weight = 60;

        assert_eq!(pokemon.height_in_meters(), "0.4 m");
        assert_eq!(pokemon.weight_in_kilograms(), "6.0 kg");
    }

    #[test]
    fn number_is_zero_padded() {
        assert_eq!(Pokemon::summary(7, "squirtle", "").pokemon_number(), "#007");
        assert_eq!(Pokemon::summary(1010, "iron-leaves", "").pokemon_number(), "#1010");
    }

    #[test]
    fn flags_default_to_false_without_species() {
        let pokemon = Pokemon::summary(150, "mewtwo", "");
        assert!(!pokemon.is_legendary());
        assert!(!pokemon.is_mythical());
    }

    #[test]
    fn primary_image_falls_back_to_front_sprite() {
        let sprites = PokemonSprites {
            front_default: Some("front.png".into()),
            ..PokemonSprites::default()
        };
        assert_eq!(sprites.primary_image(), Some("front.png"));
        assert_eq!(PokemonSprites::default().primary_image(), None);
    }

    #[test]
    fn stat_display_names_and_progress() {
        assert_eq!(stat("special-attack", 65).stat.display_name(), "Sp. Attack");
        assert_eq!(stat("hp", 45).stat.display_name(), "HP");
        assert_eq!(stat("accuracy", 0).stat.display_name(), "Accuracy");
        assert_eq!(stat("speed", 255).progress(), 1.0);
        assert_eq!(stat("speed", 300).progress(), 1.0);
    }

    #[test]
    fn type_colors_come_from_table() {
        assert_eq!(type_info("fire").color_hex(), "#F08030");
        assert_eq!(type_info("fairy").color_hex(), "#EE99AC");
        assert_eq!(type_info("stellar").color_hex(), "#68A090");
        assert_eq!(type_info("grass").display_name(), "Grass");
    }

    #[test]
    fn ability_display_name_title_cases_slug() {
        let ability = AbilityInfo {
            name: "solar-power".into(),
            url: String::new(),
        };
        assert_eq!(ability.display_name(), "Solar Power");
    }
}
