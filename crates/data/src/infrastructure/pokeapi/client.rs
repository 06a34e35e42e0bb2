//! PokeAPI v2 client.

use async_trait::async_trait;
use pokepedia_domain::{PokemonRef, RemoteError};
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{EvolutionChainDto, PokemonDetailDto, PokemonListResponse, PokemonSpeciesDto};
use crate::infrastructure::ports::RemoteDataSource;

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Per-request timeout applied to every call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Client for the PokeAPI REST endpoints.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u32)],
    ) -> Result<T, RemoteError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, ?query, "PokeAPI request");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| {
                let kind = classify_transport(&e);
                tracing::warn!(
                    url = %url,
                    error = %e,
                    kind = ?kind,
                    transient = kind.is_transient(),
                    "PokeAPI request failed"
                );
                kind
            })?;

        let status = response.status();
        if !status.is_success() {
            let kind = classify_status(status);
            tracing::warn!(
                url = %url,
                status = %status,
                kind = ?kind,
                transient = kind.is_transient(),
                "PokeAPI returned error status"
            );
            return Err(kind);
        }

        let body = response.bytes().await.map_err(|e| {
            let kind = classify_transport(&e);
            tracing::warn!(url = %url, error = %e, kind = ?kind, "Failed to read PokeAPI body");
            kind
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Failed to decode PokeAPI response");
            RemoteError::Serialization
        })
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL)
    }
}

#[async_trait]
impl RemoteDataSource for PokeApiClient {
    async fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<PokemonListResponse, RemoteError> {
        self.get_json("pokemon", &[("limit", limit), ("offset", offset)])
            .await
    }

    async fn get_pokemon_details(
        &self,
        pokemon: PokemonRef,
    ) -> Result<PokemonDetailDto, RemoteError> {
        self.get_json(&format!("pokemon/{}", pokemon), &[]).await
    }

    async fn get_pokemon_species(
        &self,
        pokemon: PokemonRef,
    ) -> Result<PokemonSpeciesDto, RemoteError> {
        self.get_json(&format!("pokemon-species/{}", pokemon), &[])
            .await
    }

    async fn get_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChainDto, RemoteError> {
        self.get_json(&format!("evolution-chain/{}", chain_id), &[])
            .await
    }
}

fn classify_transport(error: &reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::RequestTimeout
    } else if error.is_connect() {
        RemoteError::NoInternet
    } else if error.is_decode() {
        RemoteError::Serialization
    } else {
        RemoteError::Unknown
    }
}

fn classify_status(status: StatusCode) -> RemoteError {
    match status {
        StatusCode::REQUEST_TIMEOUT => RemoteError::RequestTimeout,
        StatusCode::TOO_MANY_REQUESTS => RemoteError::TooManyRequests,
        s if s.is_server_error() => RemoteError::Server,
        _ => RemoteError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PokeApiClient {
        PokeApiClient::with_timeout(&format!("{}/api/v2/", server.uri()), Duration::from_secs(2))
    }

    #[tokio::test]
    async fn list_sends_limit_and_offset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/pokemon"))
            .and(query_param("limit", "20"))
            .and(query_param("offset", "40"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1302,
                "next": "https://pokeapi.co/api/v2/pokemon?offset=60&limit=20",
                "previous": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
                "results": [
                    { "name": "nidoran-f", "url": "https://pokeapi.co/api/v2/pokemon/29/" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let page = client.get_pokemon_list(20, 40).await.unwrap();

        assert_eq!(page.count, 1302);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "nidoran-f");
    }

    #[tokio::test]
    async fn detail_path_uses_lowercased_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/pokemon/pikachu"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 25, "name": "pikachu" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let detail = client
            .get_pokemon_details(PokemonRef::Name("Pikachu".into()))
            .await
            .unwrap();

        assert_eq!(detail.id, 25);
    }

    #[tokio::test]
    async fn status_codes_are_classified() {
        let cases = [
            (408, RemoteError::RequestTimeout),
            (429, RemoteError::TooManyRequests),
            (500, RemoteError::Server),
            (503, RemoteError::Server),
            (404, RemoteError::Unknown),
        ];

        for (status, expected) in cases {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/api/v2/pokemon-species/1"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let client = client_for(&server);
            let result = client.get_pokemon_species(PokemonRef::Id(1)).await;
            assert_eq!(result.unwrap_err(), expected, "status {}", status);
        }
    }

    #[tokio::test]
    async fn malformed_body_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/evolution-chain/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.get_evolution_chain(1).await;

        assert_eq!(result.unwrap_err(), RemoteError::Serialization);
    }

    #[tokio::test]
    async fn slow_response_is_request_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/pokemon/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": 1 }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = PokeApiClient::with_timeout(
            &format!("{}/api/v2", server.uri()),
            Duration::from_millis(50),
        );
        let result = client.get_pokemon_details(PokemonRef::Id(1)).await;

        assert_eq!(result.unwrap_err(), RemoteError::RequestTimeout);
    }

    #[tokio::test]
    async fn unreachable_host_is_no_internet() {
        // Nothing listens on port 1.
        let client = PokeApiClient::with_timeout("http://127.0.0.1:1", Duration::from_secs(2));
        let result = client.get_pokemon_list(20, 0).await;

        assert_eq!(result.unwrap_err(), RemoteError::NoInternet);
    }

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(
            PokeApiClient::default().base_url(),
            "https://pokeapi.co/api/v2"
        );
    }
}
