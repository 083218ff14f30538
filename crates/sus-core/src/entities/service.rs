use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A text-generation service and its API token.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing)]
    pub token: String,
}

impl Service {
    #[must_use]
    pub const fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("name", &self.name)
            .field("token", &if self.has_token() { "<set>" } else { "<empty>" })
            .finish()
    }
}

/// A model offered by a service. Exactly one model is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Model {
    pub name: String,
    pub service: String,
    pub active: bool,
}
