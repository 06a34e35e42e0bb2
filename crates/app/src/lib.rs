//! Pokepedia app crate.
//!
//! List and detail view-models publishing their state over watch channels,
//! the UI records they render, platform adapters, and the wiring that puts
//! them on top of `pokepedia-data`.

pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod presentation;
pub mod runner;

pub use config::{AppConfig, ConfigError};
pub use runner::{Command, RunError, Services};
