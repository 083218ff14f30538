//! Elimination repository.

use async_trait::async_trait;

use sus_core::entities::Elimination;

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};

#[async_trait]
pub trait EliminationRepo: Send + Sync {
    async fn insert_elimination(&self, elimination: &Elimination) -> Result<(), DatabaseError>;

    /// Eliminations of a round, oldest first.
    async fn eliminations_for_round(
        &self,
        round_id: &str,
    ) -> Result<Vec<Elimination>, DatabaseError>;

    async fn count_eliminations_in_round(&self, round_id: &str) -> Result<i64, DatabaseError>;
}

#[async_trait]
impl EliminationRepo for SusDb {
    async fn insert_elimination(&self, elimination: &Elimination) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO eliminations (id, round_id, suspect_id, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    elimination.id.as_str(),
                    elimination.round_id.as_str(),
                    elimination.suspect_id.as_str(),
                    format_datetime(&elimination.created_at)
                ],
            )
            .await?;
        Ok(())
    }

    async fn eliminations_for_round(
        &self,
        round_id: &str,
    ) -> Result<Vec<Elimination>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, round_id, suspect_id, created_at FROM eliminations
                 WHERE round_id = ?1 ORDER BY created_at, rowid",
                [round_id],
            )
            .await?;
        let mut eliminations = Vec::new();
        while let Some(row) = rows.next().await? {
            eliminations.push(Elimination {
                id: row.get(0)?,
                round_id: row.get(1)?,
                suspect_id: row.get(2)?,
                created_at: parse_datetime(&row.get::<String>(3)?)?,
            });
        }
        Ok(eliminations)
    }

    async fn count_eliminations_in_round(&self, round_id: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM eliminations WHERE round_id = ?1",
                [round_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }
}
