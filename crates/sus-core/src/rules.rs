//! Fixed game rules.

/// Number of suspects drawn into every investigation.
pub const ROSTER_SIZE: usize = 15;

/// Eliminations after which an investigation is over: everyone but one suspect.
pub const ELIMINATIONS_TO_CLOSE: usize = ROSTER_SIZE - 1;

/// Investigator name given to a new game until the player signs it.
pub const DEFAULT_INVESTIGATOR: &str = "anonymous";

/// Prefix of every sentinel answer written when answer generation fails.
pub const FAILURE_PREFIX: &str = "failed ";

/// Pipeline steps that can follow [`FAILURE_PREFIX`] in a sentinel answer.
pub const FAILURE_STEPS: [&str; 6] = [
    "model",
    "provider",
    "service",
    "describe",
    "reflection",
    "answer",
];
