//! Entity structs for the game lifecycle.
//!
//! Record types (`Game`, `InvestigationRecord`, `Elimination`, ...) map to one
//! table row each. `GameState` and `Investigation` are the hydrated views the
//! engine hands to callers, with derived flags filled in.

mod description;
mod elimination;
mod game;
mod investigation;
mod question;
mod round;
mod score;
mod service;
mod suspect;

pub use description::Description;
pub use elimination::Elimination;
pub use game::{Game, GameState};
pub use investigation::{Investigation, InvestigationRecord};
pub use question::Question;
pub use round::Round;
pub use score::{ConflictingQuestion, ConflictingSuspect, FinalScore};
pub use service::{Model, Service};
pub use suspect::Suspect;
