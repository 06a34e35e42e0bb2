//! Wire shapes for the PokeAPI v2 JSON responses.
//!
//! Decoding is lenient: unknown fields are ignored, missing fields fall back to
//! their defaults and an explicit `null` in a non-optional position decodes to
//! the default as well.

use serde::{Deserialize, Deserializer};

/// Treats `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ name, url }` reference used throughout the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamedResourceDto {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

// =============================================================================
// GET /pokemon?limit&offset
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PokemonListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub count: u32,
    pub next: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<NamedResourceDto>,
}

// =============================================================================
// GET /pokemon/{id|name}
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PokemonDetailDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: u32,
    pub base_experience: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sprites: SpritesDto,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<StatDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<TypeSlotDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub abilities: Vec<AbilitySlotDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub species: NamedResourceDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpritesDto {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub other: OtherSpritesDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OtherSpritesDto {
    #[serde(rename = "official-artwork", deserialize_with = "null_as_default")]
    pub official_artwork: ArtworkDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtworkDto {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatDto {
    #[serde(deserialize_with = "null_as_default")]
    pub base_stat: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub effort: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub stat: NamedResourceDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeSlotDto {
    #[serde(deserialize_with = "null_as_default")]
    pub slot: u32,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_ref: NamedResourceDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbilitySlotDto {
    #[serde(deserialize_with = "null_as_default")]
    pub is_hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub slot: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ability: NamedResourceDto,
}

// =============================================================================
// GET /pokemon-species/{id|name}
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PokemonSpeciesDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_legendary: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_mythical: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub capture_rate: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub base_happiness: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_rate: NamedResourceDto,
    pub habitat: Option<NamedResourceDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub flavor_text_entries: Vec<FlavorTextDto>,
    pub evolution_chain: Option<ApiResourceDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub egg_groups: Vec<NamedResourceDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub gender_rate: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub generation: NamedResourceDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlavorTextDto {
    #[serde(deserialize_with = "null_as_default")]
    pub flavor_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: NamedResourceDto,
}

/// Unnamed `{ url }` reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiResourceDto {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

// =============================================================================
// GET /evolution-chain/{id}
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvolutionChainDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub chain: ChainLinkDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChainLinkDto {
    #[serde(deserialize_with = "null_as_default")]
    pub species: NamedResourceDto,
    #[serde(deserialize_with = "null_as_default")]
    pub evolves_to: Vec<ChainLinkDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub evolution_details: Vec<EvolutionDetailDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvolutionDetailDto {
    pub min_level: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub trigger: NamedResourceDto,
    pub item: Option<NamedResourceDto>,
}
