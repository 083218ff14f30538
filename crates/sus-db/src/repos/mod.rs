//! Repository traits, one per entity, each implemented for [`SusDb`](crate::SusDb).

pub mod description;
pub mod elimination;
pub mod game;
pub mod investigation;
pub mod question;
pub mod round;
pub mod service;
pub mod stats;
pub mod suspect;

pub use description::DescriptionRepo;
pub use elimination::EliminationRepo;
pub use game::GameRepo;
pub use investigation::InvestigationRepo;
pub use question::QuestionRepo;
pub use round::RoundRepo;
pub use service::ServiceRepo;
pub use stats::StatsRepo;
pub use suspect::SuspectRepo;
