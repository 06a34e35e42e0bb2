//! PokeAPI adapter: HTTP client, wire DTOs and their domain mapping.

mod client;
pub mod dto;
pub mod mapper;

pub use client::{PokeApiClient, DEFAULT_POKEAPI_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
