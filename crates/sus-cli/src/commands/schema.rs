use schemars::{Schema, schema_for};
use sus_core::entities::{
    ConflictingQuestion, ConflictingSuspect, Description, Elimination, FinalScore, GameState,
    Investigation, Model, Question, Round, Service, Suspect,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

#[must_use]
pub fn schema_of(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::GameState => schema_for!(GameState),
        SchemaType::Investigation => schema_for!(Investigation),
        SchemaType::Round => schema_for!(Round),
        SchemaType::Suspect => schema_for!(Suspect),
        SchemaType::Question => schema_for!(Question),
        SchemaType::Elimination => schema_for!(Elimination),
        SchemaType::Description => schema_for!(Description),
        SchemaType::FinalScore => schema_for!(FinalScore),
        SchemaType::Model => schema_for!(Model),
        SchemaType::Service => schema_for!(Service),
        SchemaType::ConflictingSuspect => schema_for!(ConflictingSuspect),
        SchemaType::ConflictingQuestion => schema_for!(ConflictingQuestion),
    }
}

/// Handle `sus schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(args.type_name), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_schema_flattens_the_game() {
        let schema = serde_json::to_value(schema_of(SchemaType::GameState)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for key in ["id", "score", "investigator", "investigation", "level", "game_over"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn service_schema_has_name() {
        let schema = serde_json::to_value(schema_of(SchemaType::Service)).unwrap();
        assert!(schema["properties"]["name"].is_object());
    }
}
