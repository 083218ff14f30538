//! Answer-pipeline timing and token budgets.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

const fn default_poll_interval_ms() -> u64 {
    1000
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_reflection_max_tokens() -> u32 {
    1000
}

const fn default_boolean_max_tokens() -> u32 {
    20
}

const fn default_description_max_tokens() -> u32 {
    1500
}

const fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OracleConfig {
    /// Delay between two reads of a pending round's answer.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// How long a caller waits for an answer before giving up.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Token budget for the reflection completion.
    #[serde(default = "default_reflection_max_tokens")]
    pub reflection_max_tokens: u32,

    /// Token budget for the YES/NO completion.
    #[serde(default = "default_boolean_max_tokens")]
    pub boolean_max_tokens: u32,

    /// Token budget for a portrait description.
    #[serde(default = "default_description_max_tokens")]
    pub description_max_tokens: u32,

    /// HTTP timeout for a single provider request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            timeout_secs: default_timeout_secs(),
            reflection_max_tokens: default_reflection_max_tokens(),
            boolean_max_tokens: default_boolean_max_tokens(),
            description_max_tokens: default_description_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl OracleConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject settings that would make waiting spin or never poll.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero poll interval or a
    /// timeout shorter than one poll interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "oracle.poll_interval_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.timeout() < self.poll_interval() {
            return Err(ConfigError::InvalidValue {
                field: "oracle.timeout_secs".into(),
                reason: "must be at least one poll interval".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OracleConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.reflection_max_tokens, 1000);
        assert_eq!(config.boolean_max_tokens, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_poll_interval_is_invalid() {
        let config = OracleConfig {
            poll_interval_ms: 0,
            ..OracleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "oracle.poll_interval_ms"
        ));
    }

    #[test]
    fn timeout_shorter_than_poll_is_invalid() {
        let config = OracleConfig {
            poll_interval_ms: 5000,
            timeout_secs: 2,
            ..OracleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
