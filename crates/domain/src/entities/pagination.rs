use serde::{Deserialize, Serialize};

use crate::entities::Pokemon;

/// One list page as returned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedPokemon {
    pub pokemon: Vec<Pokemon>,
    pub offset: u32,
    pub limit: u32,
    pub has_next_page: bool,
    pub total_count: Option<u32>,
}

impl PaginatedPokemon {
    /// Offset of the page that follows this one.
    pub fn next_offset(&self) -> u32 {
        self.offset + self.pokemon.len() as u32
    }
}
