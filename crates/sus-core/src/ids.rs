//! ID prefixes for database-generated identifiers.
//!
//! IDs have the form `<prefix>-<8 hex chars>`, e.g. `gam-3fa81c02`.
//! Suspects are the exception: their ID is the portrait file stem.

pub const PREFIX_GAME: &str = "gam";
pub const PREFIX_INVESTIGATION: &str = "inv";
pub const PREFIX_ROUND: &str = "rnd";
pub const PREFIX_ELIMINATION: &str = "elm";
pub const PREFIX_QUESTION: &str = "que";
pub const PREFIX_DESCRIPTION: &str = "dsc";

/// Every prefix handed to `generate_id`.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_GAME,
    PREFIX_INVESTIGATION,
    PREFIX_ROUND,
    PREFIX_ELIMINATION,
    PREFIX_QUESTION,
    PREFIX_DESCRIPTION,
];
