//! Error taxonomy for data access.
//!
//! Every remote call and every local store call resolves to a typed failure from
//! one of these closed enumerations. Transport and driver errors never cross the
//! data-source boundary.

use thiserror::Error;

/// Failure kinds of a remote API call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteError {
    /// The request did not complete within the configured timeout (or the server answered 408).
    #[error("request timed out")]
    RequestTimeout,

    /// The server rate-limited us (429).
    #[error("too many requests")]
    TooManyRequests,

    /// The host could not be reached.
    #[error("no internet connection")]
    NoInternet,

    /// The server answered with a 5xx status.
    #[error("server error")]
    Server,

    /// The response body could not be decoded.
    #[error("response could not be decoded")]
    Serialization,

    #[error("unknown remote error")]
    Unknown,
}

impl RemoteError {
    /// All variants, in declaration order.
    pub const ALL: [RemoteError; 6] = [
        RemoteError::RequestTimeout,
        RemoteError::TooManyRequests,
        RemoteError::NoInternet,
        RemoteError::Server,
        RemoteError::Serialization,
        RemoteError::Unknown,
    ];

    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RequestTimeout | Self::TooManyRequests | Self::NoInternet | Self::Server
        )
    }
}

/// Failure kinds of the local store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalError {
    #[error("disk is full")]
    DiskFull,

    #[error("unknown local error")]
    Unknown,
}

impl LocalError {
    pub const ALL: [LocalError; 2] = [LocalError::DiskFull, LocalError::Unknown];
}

/// Either side of the taxonomy, for callers that surface both.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataError {
    #[error("remote: {0}")]
    Remote(#[from] RemoteError),

    #[error("local: {0}")]
    Local(#[from] LocalError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn transient_remote_errors() {
        assert!(RemoteError::RequestTimeout.is_transient());
        assert!(RemoteError::Server.is_transient());
        assert!(!RemoteError::Serialization.is_transient());
        assert!(!RemoteError::Unknown.is_transient());
    }

    #[test]
    fn data_error_wraps_both_sides() {
        let remote: DataError = RemoteError::NoInternet.into();
        let local: DataError = LocalError::DiskFull.into();

        assert_eq!(remote, DataError::Remote(RemoteError::NoInternet));
        assert_eq!(local.to_string(), "local: disk is full");
    }

    #[test]
    fn all_lists_every_variant_once() {
        let remote: HashSet<_> = RemoteError::ALL.iter().collect();
        let local: HashSet<_> = LocalError::ALL.iter().collect();

        assert_eq!(remote.len(), RemoteError::ALL.len());
        assert_eq!(remote.len(), 6);
        assert_eq!(local.len(), LocalError::ALL.len());
        assert_eq!(local.len(), 2);
    }
}
