//! # sus-engine
//!
//! Game rules for Unusual Suspects: a game is a chain of investigations, an
//! investigation is fifteen suspects and a hidden culprit, and each round
//! asks the witness one yes/no question about the culprit. The player
//! releases suspects they believe innocent; releasing the culprit ends the
//! game.
//!
//! [`GameEngine`] is the entry point. The smaller engines are public for
//! callers that need one concern in isolation.

pub mod elimination;
pub mod error;
pub mod game;
pub mod investigation;
pub mod question_bank;
mod questions;
pub mod round;
pub mod score;
pub mod suspect_pool;

pub use elimination::{EliminationLedger, EliminationOutcome};
pub use error::GameError;
pub use game::{GameEngine, GameSettings};
pub use investigation::InvestigationEngine;
pub use question_bank::QuestionBank;
pub use round::RoundEngine;
pub use score::ScoreEngine;
pub use suspect_pool::SuspectPool;
pub use sus_oracle::WaitOutcome;
