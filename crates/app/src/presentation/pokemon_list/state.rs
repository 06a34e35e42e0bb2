use crate::presentation::{PokemonUi, UiText};

/// Everything the list screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonListState {
    pub is_loading: bool,
    pub pokemon_list: Vec<PokemonUi>,
    pub error_message: Option<UiText>,
    pub is_loading_more: bool,
    /// Offset of the next page to request.
    pub current_offset: u32,
    pub can_load_more: bool,
    pub search_query: String,
    /// A debounced search is pending.
    pub is_searching: bool,
}

impl Default for PokemonListState {
    fn default() -> Self {
        Self {
            is_loading: false,
            pokemon_list: Vec::new(),
            error_message: None,
            is_loading_more: false,
            current_offset: 0,
            can_load_more: true,
            search_query: String::new(),
            is_searching: false,
        }
    }
}

impl PokemonListState {
    pub fn has_active_search(&self) -> bool {
        !self.search_query.is_empty()
    }
}

/// User intents dispatched to [`super::PokemonListViewModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonListAction {
    LoadPokemon,
    LoadNextPage,
    SearchPokemon(String),
    ClearSearch,
    Retry,
}
