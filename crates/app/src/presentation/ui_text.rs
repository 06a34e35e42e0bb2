//! User-facing text and the error → message mapping.

use pokepedia_domain::{DataError, LocalError, RemoteError};
use std::fmt;

/// Text shown to the user: either a fixed message or one built at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiText {
    Message(&'static str),
    Dynamic(String),
}

impl UiText {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Message(text) => text,
            Self::Dynamic(text) => text,
        }
    }
}

impl fmt::Display for UiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

impl From<RemoteError> for UiText {
    fn from(error: RemoteError) -> Self {
        Self::Message(match error {
            RemoteError::RequestTimeout => "The request timed out. Please try again.",
            RemoteError::TooManyRequests => "Too many requests. Please wait a moment and try again.",
            RemoteError::NoInternet => "No internet connection. Please check your connection.",
            RemoteError::Server => "Server issue. Please try again later.",
            RemoteError::Serialization => "Couldn't read the server response.",
            RemoteError::Unknown => GENERIC_ERROR,
        })
    }
}

impl From<LocalError> for UiText {
    fn from(error: LocalError) -> Self {
        Self::Message(match error {
            LocalError::DiskFull => "Not enough storage space on this device.",
            LocalError::Unknown => GENERIC_ERROR,
        })
    }
}

impl From<DataError> for UiText {
    fn from(error: DataError) -> Self {
        match error {
            DataError::Remote(e) => e.into(),
            DataError::Local(e) => e.into(),
        }
    }
}
