//! Aggregate statistics over finished play.
//!
//! A "wrong elimination" is the culprit being eliminated in a round. These
//! queries surface which suspects and which questions mislead players most.

use async_trait::async_trait;

use sus_core::entities::{ConflictingQuestion, ConflictingSuspect};

use crate::SusDb;
use crate::error::DatabaseError;

#[async_trait]
pub trait StatsRepo: Send + Sync {
    /// Suspects most often eliminated while being the culprit, counted once
    /// per round.
    async fn conflicting_suspects(
        &self,
        limit: i64,
    ) -> Result<Vec<ConflictingSuspect>, DatabaseError>;

    /// Questions whose rounds most often ended with the culprit eliminated.
    async fn conflicting_questions(
        &self,
        limit: i64,
    ) -> Result<Vec<ConflictingQuestion>, DatabaseError>;
}

#[async_trait]
impl StatsRepo for SusDb {
    async fn conflicting_suspects(
        &self,
        limit: i64,
    ) -> Result<Vec<ConflictingSuspect>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT s.id, s.image, COUNT(DISTINCT e.round_id) AS wrong
                 FROM eliminations e
                 JOIN rounds r ON e.round_id = r.id
                 JOIN investigations i ON r.investigation_id = i.id
                 JOIN suspects s ON e.suspect_id = s.id
                 WHERE e.suspect_id = i.culprit_id
                 GROUP BY s.id
                 ORDER BY wrong DESC, s.id
                 LIMIT ?1",
                [limit],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(ConflictingSuspect {
                suspect_id: row.get(0)?,
                image: row.get(1)?,
                wrong_eliminations: row.get(2)?,
            });
        }
        Ok(out)
    }

    async fn conflicting_questions(
        &self,
        limit: i64,
    ) -> Result<Vec<ConflictingQuestion>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT q.id, q.english, q.czech, q.polish, COUNT(*) AS wrong
                 FROM rounds r
                 JOIN questions q ON r.question_id = q.id
                 JOIN investigations i ON r.investigation_id = i.id
                 WHERE EXISTS (
                     SELECT 1 FROM eliminations e
                     WHERE e.round_id = r.id AND e.suspect_id = i.culprit_id
                 )
                 GROUP BY q.id
                 ORDER BY wrong DESC, q.id
                 LIMIT ?1",
                [limit],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(ConflictingQuestion {
                question_id: row.get(0)?,
                english: row.get(1)?,
                czech: row.get(2)?,
                polish: row.get(3)?,
                wrong_eliminations: row.get(4)?,
            });
        }
        Ok(out)
    }
}
