//! Game engine error types.

use std::path::PathBuf;

use sus_db::error::DatabaseError;
use sus_oracle::OracleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Store read or write failed.
    #[error("store error: {0}")]
    Store(DatabaseError),

    /// Fewer suspects are registered than an investigation needs.
    #[error("need {required} suspects, only {found} registered")]
    InsufficientSuspects { found: usize, required: usize },

    /// An investigation broke the roster rules and was not stored.
    #[error("malformed investigation: {0}")]
    MalformedInvestigation(String),

    /// No questions to draw from.
    #[error("question bank is empty")]
    EmptyQuestionBank,

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Service name outside the closed provider set.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// A provider call failed outside the background pipeline.
    #[error("provider call failed: {0}")]
    ProviderCall(OracleError),

    #[error("cannot read portraits from {}: {source}", path.display())]
    Portraits {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<DatabaseError> for GameError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::MalformedInvestigation(msg) => Self::MalformedInvestigation(msg),
            other => Self::Store(other),
        }
    }
}

impl From<OracleError> for GameError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::UnsupportedProvider(name) => Self::UnsupportedProvider(name),
            OracleError::Store(db) => db.into(),
            other => Self::ProviderCall(other),
        }
    }
}

/// Map a missing row to [`GameError::NotFound`].
pub(crate) fn or_not_found(err: DatabaseError, entity: &'static str, id: &str) -> GameError {
    match err {
        DatabaseError::NoResult => GameError::NotFound {
            entity,
            id: id.to_string(),
        },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_roster_keeps_its_kind() {
        let err: GameError = DatabaseError::MalformedInvestigation("14 suspects".into()).into();
        assert!(matches!(err, GameError::MalformedInvestigation(m) if m == "14 suspects"));
    }

    #[test]
    fn oracle_errors_split_by_kind() {
        let err: GameError = OracleError::UnsupportedProvider("Gemini".into()).into();
        assert!(matches!(err, GameError::UnsupportedProvider(_)));

        let err: GameError = OracleError::MissingToken("OpenAI".into()).into();
        assert!(matches!(err, GameError::ProviderCall(_)));

        let err: GameError = OracleError::Store(DatabaseError::NoResult).into();
        assert!(matches!(err, GameError::Store(DatabaseError::NoResult)));
    }

    #[test]
    fn no_result_becomes_not_found() {
        let err = or_not_found(DatabaseError::NoResult, "round", "rnd-1");
        assert!(matches!(err, GameError::NotFound { entity: "round", id } if id == "rnd-1"));
    }
}
