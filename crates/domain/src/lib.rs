//! Pokepedia domain layer.
//!
//! Pokémon records as the app understands them, the display values derived from
//! them, and the closed error taxonomy every data call resolves to. No I/O lives
//! here.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{
    AbilityInfo, EvolutionStage, PaginatedPokemon, Pokemon, PokemonAbility, PokemonSpecies,
    PokemonSprites, PokemonStat, PokemonType, StatInfo, TypeInfo, DEFAULT_EVOLUTION_TRIGGER,
    GENDERLESS_RATE, MAX_BASE_STAT,
};
pub use error::{DataError, LocalError, RemoteError};
pub use ids::{official_artwork_url, pokemon_id_from_url, PokemonRef};
