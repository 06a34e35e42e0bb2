//! Local Pokémon store port.

use async_trait::async_trait;
use pokepedia_domain::{LocalError, Pokemon};

/// Embedded cache of Pokémon records keyed by id.
///
/// Only used for name search; list and detail rendering always go to the API.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Insert or replace a record.
    async fn upsert(&self, pokemon: &Pokemon) -> Result<(), LocalError>;

    /// Insert or replace a batch in one transaction.
    async fn upsert_many(&self, pokemon: &[Pokemon]) -> Result<(), LocalError>;

    async fn get_by_id(&self, id: u32) -> Result<Option<Pokemon>, LocalError>;

    /// Case-insensitive substring match on the name, ordered by id.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Pokemon>, LocalError>;

    async fn delete(&self, id: u32) -> Result<(), LocalError>;

    async fn clear(&self) -> Result<(), LocalError>;
}
