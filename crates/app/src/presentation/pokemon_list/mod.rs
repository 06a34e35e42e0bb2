//! Paginated, searchable Pokémon list.

mod state;
mod view_model;

pub use state::{PokemonListAction, PokemonListState};
pub use view_model::{ListSettings, PokemonListViewModel};
