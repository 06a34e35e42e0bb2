//! Adapters behind the data ports.

pub mod clock;
pub mod pokeapi;
pub mod ports;
pub mod sqlite_store;
