//! Repositories composing the remote API and the local store.

mod pokemon;

pub use pokemon::{DefaultPokemonRepository, PokemonRepository};

#[cfg(any(test, feature = "testing"))]
pub use pokemon::MockPokemonRepository;
