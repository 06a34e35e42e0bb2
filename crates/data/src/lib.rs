//! Pokepedia data layer.
//!
//! Talks to PokeAPI, keeps a local SQLite copy of fetched records, and exposes
//! both through [`PokemonRepository`].
//!
//! Enable the `testing` feature to get mockall mocks of the repository and
//! the ports in downstream crates.

pub mod infrastructure;
pub mod repositories;

pub use infrastructure::clock::SystemClock;
pub use infrastructure::pokeapi::{PokeApiClient, DEFAULT_POKEAPI_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use infrastructure::ports::{ClockPort, PokemonStore, RemoteDataSource};
pub use infrastructure::sqlite_store::SqlitePokemonStore;
pub use repositories::{DefaultPokemonRepository, PokemonRepository};

#[cfg(any(test, feature = "testing"))]
pub use repositories::MockPokemonRepository;
