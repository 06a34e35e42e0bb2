use pokepedia_domain::PokemonRef;

use crate::presentation::{PokemonUi, UiText};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonDetailState {
    pub is_loading: bool,
    pub pokemon: Option<PokemonUi>,
    pub error_message: Option<UiText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonDetailAction {
    LoadPokemon(PokemonRef),
    Retry,
}
