//! Oracle error types.

use std::path::PathBuf;

use sus_db::error::DatabaseError;
use thiserror::Error;

/// Errors from provider calls and the answer pipeline.
#[derive(Debug, Error)]
pub enum OracleError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a provider response, or it carried no text.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service name is outside the closed provider set, or no client is
    /// registered for it.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The provider cannot do what was asked (e.g. describe an image).
    #[error("{provider} does not support {capability}")]
    UnsupportedCapability {
        provider: String,
        capability: &'static str,
    },

    /// The service needs an API token and none is stored.
    #[error("no API token stored for {0}")]
    MissingToken(String),

    /// A suspect portrait could not be read.
    #[error("cannot read portrait {}: {source}", path.display())]
    Portrait {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Store read or write failed.
    #[error(transparent)]
    Store(#[from] DatabaseError),
}
