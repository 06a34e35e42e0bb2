use std::fmt;

use serde::{Deserialize, Serialize};

/// Official artwork CDN template; `{id}` is the national dex number.
const OFFICIAL_ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Selects a Pokémon on the API either by national dex number or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl PokemonRef {
    /// Parses user input: digits become an id, anything else a name.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(trimmed.to_lowercase()),
        }
    }

    pub fn as_id(&self) -> Option<u32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }
}

/// Renders the API path segment (`pokemon/{this}`).
impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "{}", name.trim().to_lowercase()),
        }
    }
}

impl From<u32> for PokemonRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for PokemonRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PokemonRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Extracts the numeric id from the last path segment of an API resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` → `Some(25)`.
pub fn pokemon_id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

/// Official artwork URL for a dex number.
pub fn official_artwork_url(id: u32) -> String {
    format!("{}/{}.png", OFFICIAL_ARTWORK_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_from_url_with_trailing_slash() {
        assert_eq!(
            pokemon_id_from_url("https://pokeapi.co/api/v2/pokemon/25/"),
            Some(25)
        );
        assert_eq!(
            pokemon_id_from_url("https://pokeapi.co/api/v2/pokemon-species/133"),
            Some(133)
        );
    }

    #[test]
    fn rejects_url_without_numeric_tail() {
        assert_eq!(pokemon_id_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(pokemon_id_from_url(""), None);
    }

    #[test]
    fn artwork_url_uses_cdn_template() {
        assert_eq!(
            official_artwork_url(6),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/6.png"
        );
    }

    #[test]
    fn pokemon_ref_parse_and_display() {
        assert_eq!(PokemonRef::parse(" 25 "), PokemonRef::Id(25));
        assert_eq!(PokemonRef::parse("Pikachu"), PokemonRef::Name("pikachu".into()));
        assert_eq!(PokemonRef::Name(" Mew ".into()).to_string(), "mew");
        assert_eq!(PokemonRef::from(150).to_string(), "150");
    }
}
