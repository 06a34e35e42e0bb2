//! Outbound ports - Interfaces for platform services
//!
//! Data access ports live in `pokepedia-data`; this module only holds what
//! the app itself needs from the host platform.

pub mod url_launcher;

pub use url_launcher::{youtube_watch_url, UrlLauncher};
