//! Remote data source port.

use async_trait::async_trait;
use pokepedia_domain::{PokemonRef, RemoteError};

use crate::infrastructure::pokeapi::dto::{
    EvolutionChainDto, PokemonDetailDto, PokemonListResponse, PokemonSpeciesDto,
};

/// Read-only access to the Pokémon REST API.
///
/// Every failure is already classified into [`RemoteError`]; transport errors
/// never cross this boundary.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    async fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<PokemonListResponse, RemoteError>;

    async fn get_pokemon_details(
        &self,
        pokemon: PokemonRef,
    ) -> Result<PokemonDetailDto, RemoteError>;

    async fn get_pokemon_species(
        &self,
        pokemon: PokemonRef,
    ) -> Result<PokemonSpeciesDto, RemoteError>;

    async fn get_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChainDto, RemoteError>;
}
