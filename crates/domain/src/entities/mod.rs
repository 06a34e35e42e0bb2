//! Domain records.

mod evolution;
mod pagination;
mod pokemon;
mod species;

pub use evolution::{EvolutionStage, DEFAULT_EVOLUTION_TRIGGER};
pub use pagination::PaginatedPokemon;
pub use pokemon::{
    AbilityInfo, Pokemon, PokemonAbility, PokemonSprites, PokemonStat, PokemonType, StatInfo,
    TypeInfo, MAX_BASE_STAT,
};
pub use species::{PokemonSpecies, GENDERLESS_RATE};
