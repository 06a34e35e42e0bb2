//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The REST API (could swap PokeAPI for a mirror or fixture server)
//! - Local storage (could swap SQLite for another embedded store)
//! - Clock (for testing)

mod remote;
mod store;
mod testing;

pub use remote::RemoteDataSource;
pub use store::PokemonStore;
pub use testing::ClockPort;

#[cfg(any(test, feature = "testing"))]
pub use remote::MockRemoteDataSource;
#[cfg(any(test, feature = "testing"))]
pub use store::MockPokemonStore;
#[cfg(any(test, feature = "testing"))]
pub use testing::MockClockPort;
