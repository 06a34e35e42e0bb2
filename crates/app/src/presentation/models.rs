//! Flattened records the presentation layer renders directly.
//!
//! Every display string is computed once here so rendering never has to
//! reach back into the domain.

use pokepedia_domain::{
    EvolutionStage, Pokemon, PokemonAbility, PokemonSpecies, PokemonStat, PokemonType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PokemonUi {
    pub id: u32,
    pub name: String,
    pub formatted_name: String,
    pub number: String,
    pub image_url: Option<String>,
    pub sprites: SpritesUi,
    pub height: String,
    pub weight: String,
    pub base_experience: u32,
    pub stats: Vec<StatUi>,
    pub types: Vec<TypeUi>,
    pub abilities: Vec<AbilityUi>,
    pub species: Option<SpeciesUi>,
    pub description: String,
    pub evolution_chain: Vec<EvolutionStageUi>,
    pub is_legendary: bool,
    pub is_mythical: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpritesUi {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatUi {
    pub name: String,
    pub display_name: String,
    pub value: u32,
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUi {
    pub name: String,
    pub display_name: String,
    pub color_hex: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityUi {
    pub name: String,
    pub display_name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesUi {
    pub generation: String,
    pub gender_ratio: String,
    pub capture_rate: u32,
    pub base_happiness: u32,
    pub growth_rate: String,
    pub habitat: Option<String>,
    pub egg_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStageUi {
    pub pokemon_id: u32,
    pub name: String,
    pub image_url: String,
    pub min_level: Option<u32>,
    pub trigger: String,
    pub item: Option<String>,
}

impl PokemonUi {
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl From<&Pokemon> for PokemonUi {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            formatted_name: pokemon.formatted_name(),
            number: pokemon.pokemon_number(),
            image_url: pokemon.sprites.primary_image().map(str::to_string),
            sprites: SpritesUi {
                front_default: pokemon.sprites.front_default.clone(),
                front_shiny: pokemon.sprites.front_shiny.clone(),
                back_default: pokemon.sprites.back_default.clone(),
                back_shiny: pokemon.sprites.back_shiny.clone(),
                official_artwork: pokemon.sprites.official_artwork.clone(),
            },
            height: pokemon.height_in_meters(),
            weight: pokemon.weight_in_kilograms(),
            base_experience: pokemon.base_experience,
            stats: pokemon.stats.iter().map(StatUi::from).collect(),
            types: pokemon.types.iter().map(TypeUi::from).collect(),
            abilities: pokemon.abilities.iter().map(AbilityUi::from).collect(),
            species: pokemon.species.as_ref().map(SpeciesUi::from),
            description: pokemon.description.clone(),
            evolution_chain: pokemon
                .evolution_chain
                .iter()
                .map(EvolutionStageUi::from)
                .collect(),
            is_legendary: pokemon.is_legendary(),
            is_mythical: pokemon.is_mythical(),
        }
    }
}

impl From<Pokemon> for PokemonUi {
    fn from(pokemon: Pokemon) -> Self {
        Self::from(&pokemon)
    }
}

impl From<&PokemonStat> for StatUi {
    fn from(stat: &PokemonStat) -> Self {
        Self {
            name: stat.stat.name.clone(),
            display_name: stat.stat.display_name(),
            value: stat.base_stat,
            progress: stat.progress(),
        }
    }
}

impl From<&PokemonType> for TypeUi {
    fn from(slot: &PokemonType) -> Self {
        Self {
            name: slot.r#type.name.clone(),
            display_name: slot.r#type.display_name(),
            color_hex: slot.r#type.color_hex(),
        }
    }
}

impl From<&PokemonAbility> for AbilityUi {
    fn from(slot: &PokemonAbility) -> Self {
        Self {
            name: slot.ability.name.clone(),
            display_name: slot.ability.display_name(),
            is_hidden: slot.is_hidden,
        }
    }
}

impl From<&PokemonSpecies> for SpeciesUi {
    fn from(species: &PokemonSpecies) -> Self {
        Self {
            generation: species.formatted_generation(),
            gender_ratio: species.gender_ratio(),
            capture_rate: species.capture_rate,
            base_happiness: species.base_happiness,
            growth_rate: species.growth_rate.clone(),
            habitat: species.habitat.clone(),
            egg_groups: species.egg_groups.clone(),
        }
    }
}

impl From<&EvolutionStage> for EvolutionStageUi {
    fn from(stage: &EvolutionStage) -> Self {
        Self {
            pokemon_id: stage.pokemon_id,
            name: stage.pokemon_name.clone(),
            image_url: stage.artwork_url(),
            min_level: stage.min_level,
            trigger: stage.trigger.clone(),
            item: stage.item.clone(),
        }
    }
}
