//! JSON shape checks for the caller-facing entities.
//!
//! Transports serialize these types directly, so the schema generated from the
//! Rust types must accept what serde actually emits.

use chrono::Utc;
use schemars::schema_for;
use sus_core::entities::*;
use sus_core::enums::AnswerState;

fn validate<T: serde::Serialize + schemars::JsonSchema>(value: &T) -> Vec<String> {
    let schema = serde_json::to_value(schema_for!(T)).unwrap();
    let instance = serde_json::to_value(value).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(&instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_round(answer: &str) -> Round {
    Round {
        id: "rnd-00000001".into(),
        investigation_id: "inv-00000001".into(),
        question: Question {
            id: "que-00000001".into(),
            english: "Does the suspect like pizza?".into(),
            czech: "Má podezřelý rád pizzu?".into(),
            polish: "Czy podejrzany lubi pizzę?".into(),
            topic: "basic".into(),
            level: 1,
        },
        answer: answer.into(),
        eliminations: vec![Elimination {
            id: "elm-00000001".into(),
            round_id: "rnd-00000001".into(),
            suspect_id: "s01".into(),
            created_at: Utc::now(),
        }],
        created_at: Utc::now(),
    }
}

fn sample_state() -> GameState {
    let now = Utc::now();
    GameState {
        game: Game {
            id: "gam-00000001".into(),
            created_at: now,
            score: 12,
            investigator: "anonymous".into(),
        },
        investigation: Investigation {
            id: "inv-00000001".into(),
            game_id: "gam-00000001".into(),
            created_at: now,
            culprit_id: "s02".into(),
            suspects: vec![Suspect {
                id: "s01".into(),
                image: "s01.jpg".into(),
                created_at: now,
                free: true,
                fled: false,
            }],
            rounds: vec![sample_round("YES")],
            investigation_over: false,
        },
        level: 1,
        game_over: false,
    }
}

#[test]
fn game_state_matches_its_schema() {
    let errors = validate(&sample_state());
    assert!(errors.is_empty(), "schema errors: {errors:?}");
}

#[test]
fn game_state_flattens_game_fields() {
    let json = serde_json::to_value(sample_state()).unwrap();
    assert_eq!(json["id"], "gam-00000001");
    assert_eq!(json["score"], 12);
    assert_eq!(json["investigation"]["culprit_id"], "s02");
    assert!(json.get("game").is_none());
}

#[test]
fn round_exposes_answer_state() {
    assert_eq!(sample_round("").answer_state(), AnswerState::Pending);
    assert_eq!(
        sample_round("failed reflection").answer_state(),
        AnswerState::Failed("failed reflection".into())
    );
}

#[test]
fn investigation_counts_eliminations_across_rounds() {
    let mut state = sample_state();
    state.investigation.rounds.push(sample_round("NO"));
    assert_eq!(state.investigation.elimination_count(), 2);
    assert_eq!(
        state.investigation.current_round().map(|r| r.answer.as_str()),
        Some("NO")
    );
}

#[test]
fn service_token_never_serialized() {
    let service = Service {
        name: "OpenAI".into(),
        token: "sk-secret".into(),
    };
    let json = serde_json::to_string(&service).unwrap();
    assert!(!json.contains("sk-secret"));
    assert!(!format!("{service:?}").contains("sk-secret"));
    assert!(service.has_token());
}
