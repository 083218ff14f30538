//! The combined store seam.
//!
//! Engine and oracle code depend on `Arc<dyn Store>` rather than on
//! [`SusDb`] directly, so any backend that implements every repository
//! trait can stand in.

use async_trait::async_trait;

use crate::SusDb;
use crate::error::DatabaseError;
use crate::repos::{
    DescriptionRepo, EliminationRepo, GameRepo, InvestigationRepo, QuestionRepo, RoundRepo,
    ServiceRepo, StatsRepo, SuspectRepo,
};

#[async_trait]
pub trait Store:
    SuspectRepo
    + QuestionRepo
    + GameRepo
    + InvestigationRepo
    + RoundRepo
    + EliminationRepo
    + DescriptionRepo
    + ServiceRepo
    + StatsRepo
    + Send
    + Sync
{
    /// Fresh prefixed identifier, e.g. `gam-3fa81c02`.
    async fn next_id(&self, prefix: &str) -> Result<String, DatabaseError>;
}

#[async_trait]
impl Store for SusDb {
    async fn next_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        self.generate_id(prefix).await
    }
}
