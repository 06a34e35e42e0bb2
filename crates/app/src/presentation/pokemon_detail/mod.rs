//! Single Pokémon detail screen.

mod state;
mod view_model;

pub use state::{PokemonDetailAction, PokemonDetailState};
pub use view_model::PokemonDetailViewModel;
