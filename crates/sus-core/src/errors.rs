//! Cross-cutting error types.
//!
//! Crate-specific errors (`DatabaseError`, `OracleError`, `GameError`) live in
//! their own crates and wrap these where needed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Provider name outside the supported set.
    #[error("Unsupported provider: '{0}'")]
    UnsupportedProvider(String),
}
