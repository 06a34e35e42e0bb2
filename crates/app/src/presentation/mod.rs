//! View-models and the records they publish.

mod models;
pub mod pokemon_detail;
pub mod pokemon_list;
mod ui_text;

pub use models::{
    AbilityUi, EvolutionStageUi, PokemonUi, SpeciesUi, SpritesUi, StatUi, TypeUi,
};
pub use pokemon_detail::{PokemonDetailAction, PokemonDetailState, PokemonDetailViewModel};
pub use pokemon_list::{ListSettings, PokemonListAction, PokemonListState, PokemonListViewModel};
pub use ui_text::UiText;
