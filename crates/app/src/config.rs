//! Runtime configuration from environment variables.
//!
//! | variable | default |
//! |----------|---------|
//! | `POKEPEDIA_API_BASE_URL` | `https://pokeapi.co/api/v2/` |
//! | `POKEPEDIA_REQUEST_TIMEOUT_MS` | `20000` |
//! | `POKEPEDIA_PAGE_SIZE` | `20` |
//! | `POKEPEDIA_SEARCH_DEBOUNCE_MS` | `300` |
//! | `POKEPEDIA_DB_PATH` | `pokepedia.db` in the platform data dir |

use directories::ProjectDirs;
use pokepedia_data::{DEFAULT_POKEAPI_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::presentation::ListSettings;

pub const ENV_API_BASE_URL: &str = "POKEPEDIA_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "POKEPEDIA_REQUEST_TIMEOUT_MS";
pub const ENV_PAGE_SIZE: &str = "POKEPEDIA_PAGE_SIZE";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "POKEPEDIA_SEARCH_DEBOUNCE_MS";
pub const ENV_DB_PATH: &str = "POKEPEDIA_DB_PATH";

const DB_FILE_NAME: &str = "pokepedia.db";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub page_size: u32,
    pub search_debounce: Duration,
    pub db_path: PathBuf,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Ignoring unreadable .env file");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup(ENV_API_BASE_URL) {
            Some(value) => parse_base_url(ENV_API_BASE_URL, value)?,
            None => DEFAULT_POKEAPI_BASE_URL.to_string(),
        };

        let request_timeout = match lookup(ENV_REQUEST_TIMEOUT_MS) {
            Some(value) => Duration::from_millis(parse_positive(ENV_REQUEST_TIMEOUT_MS, value)?),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let defaults = ListSettings::default();
        let page_size = match lookup(ENV_PAGE_SIZE) {
            Some(value) => u32::try_from(parse_positive(ENV_PAGE_SIZE, value.clone())?).map_err(
                |_| ConfigError::InvalidNumber {
                    name: ENV_PAGE_SIZE,
                    value,
                },
            )?,
            None => defaults.page_size,
        };

        let search_debounce = match lookup(ENV_SEARCH_DEBOUNCE_MS) {
            Some(value) => Duration::from_millis(parse_positive(ENV_SEARCH_DEBOUNCE_MS, value)?),
            None => defaults.search_debounce,
        };

        let db_path = lookup(ENV_DB_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        Ok(Self {
            api_base_url,
            request_timeout,
            page_size,
            search_debounce,
            db_path,
        })
    }

    pub fn list_settings(&self) -> ListSettings {
        ListSettings {
            page_size: self.page_size,
            search_debounce: self.search_debounce,
        }
    }
}

fn parse_positive(name: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}

fn parse_base_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url.to_string()),
        _ => Err(ConfigError::InvalidUrl { name, value }),
    }
}

fn default_db_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("io", "pokepedia", "pokepedia") {
        dirs.data_dir().join(DB_FILE_NAME)
    } else {
        // Fallback to current directory if project dirs unavailable
        PathBuf::from(DB_FILE_NAME)
    }
}
