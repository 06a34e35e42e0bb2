//! Pokémon repository: the single entry point view-models talk to.

use async_trait::async_trait;
use pokepedia_domain::{PaginatedPokemon, Pokemon, PokemonRef, RemoteError};
use std::sync::Arc;

use crate::infrastructure::pokeapi::dto::PokemonSpeciesDto;
use crate::infrastructure::pokeapi::mapper;
use crate::infrastructure::ports::{PokemonStore, RemoteDataSource};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// One page of lightweight records.
    async fn get_pokemon(&self, limit: u32, offset: u32) -> Result<PaginatedPokemon, RemoteError>;

    /// Full record. Only the detail request itself can fail the call; missing
    /// species or evolution data degrades to defaults.
    async fn get_pokemon_details(&self, pokemon: PokemonRef) -> Result<Pokemon, RemoteError>;

    /// Name search over locally stored records. Never touches the network.
    async fn search_pokemon(&self, query: &str) -> Result<Vec<Pokemon>, RemoteError>;
}

/// Repository backed by the remote API, writing detail records through to
/// the local store.
pub struct DefaultPokemonRepository {
    remote: Arc<dyn RemoteDataSource>,
    store: Arc<dyn PokemonStore>,
}

impl DefaultPokemonRepository {
    pub fn new(remote: Arc<dyn RemoteDataSource>, store: Arc<dyn PokemonStore>) -> Self {
        Self { remote, store }
    }

    async fn attach_species(&self, pokemon: &mut Pokemon, species: PokemonSpeciesDto, url: &str) {
        pokemon.species = Some(mapper::species_to_domain(&species, url));
        pokemon.description = mapper::english_description(&species.flavor_text_entries);

        let Some(chain_id) = mapper::evolution_chain_id(&species) else {
            return;
        };

        match self.remote.get_evolution_chain(chain_id).await {
            Ok(chain) => pokemon.evolution_chain = mapper::to_evolution_stages(&chain.chain),
            Err(e) => {
                tracing::warn!(pokemon_id = pokemon.id, chain_id, error = %e, "Evolution chain unavailable");
            }
        }
    }
}

#[async_trait]
impl PokemonRepository for DefaultPokemonRepository {
    async fn get_pokemon(&self, limit: u32, offset: u32) -> Result<PaginatedPokemon, RemoteError> {
        let response = self.remote.get_pokemon_list(limit, offset).await?;
        let page = mapper::to_paginated(response, limit, offset)?;

        tracing::debug!(
            offset,
            returned = page.pokemon.len(),
            has_next_page = page.has_next_page,
            "Fetched Pokémon page"
        );
        Ok(page)
    }

    async fn get_pokemon_details(&self, pokemon: PokemonRef) -> Result<Pokemon, RemoteError> {
        // Species starts before the detail request is awaited.
        let species_task = {
            let remote = Arc::clone(&self.remote);
            let pokemon = pokemon.clone();
            tokio::spawn(async move { remote.get_pokemon_species(pokemon).await })
        };

        let detail = match self.remote.get_pokemon_details(pokemon.clone()).await {
            Ok(detail) => detail,
            Err(e) => {
                species_task.abort();
                return Err(e);
            }
        };

        let species_url = detail.species.url.clone();
        let mut result = mapper::detail_to_pokemon(detail);

        match species_task.await {
            Ok(Ok(species)) => self.attach_species(&mut result, species, &species_url).await,
            Ok(Err(e)) => {
                tracing::warn!(pokemon = %pokemon, error = %e, "Species unavailable");
            }
            Err(e) => {
                tracing::warn!(pokemon = %pokemon, error = %e, "Species task failed");
            }
        }

        if let Err(e) = self.store.upsert(&result).await {
            tracing::warn!(pokemon_id = result.id, error = %e, "Failed to cache Pokémon");
        }

        Ok(result)
    }

    async fn search_pokemon(&self, query: &str) -> Result<Vec<Pokemon>, RemoteError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.store.search_by_name(&query).await.map_err(|e| {
            tracing::warn!(query = %query, error = %e, "Local search failed");
            RemoteError::Unknown
        })
    }
}
