//! Round repository.
//!
//! A round pairs one question with the witness answer. The answer column is
//! written exactly once by the oracle, after the round row exists.

use async_trait::async_trait;

use sus_core::entities::Round;

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};
use crate::repos::EliminationRepo;
use crate::repos::question::row_to_question;

#[async_trait]
pub trait RoundRepo: Send + Sync {
    /// Insert a round. Its answer and eliminations are ignored; both start empty.
    async fn insert_round(&self, round: &Round) -> Result<(), DatabaseError>;

    /// Load a round with its question and eliminations.
    async fn get_round(&self, id: &str) -> Result<Round, DatabaseError>;

    /// Rounds of an investigation, oldest first.
    async fn rounds_for_investigation(
        &self,
        investigation_id: &str,
    ) -> Result<Vec<Round>, DatabaseError>;

    /// Raw answer column. `None` when the round does not exist.
    async fn get_answer(&self, round_id: &str) -> Result<Option<String>, DatabaseError>;

    /// Overwrite the answer column. Returns `false` when no round matched.
    async fn save_answer(&self, round_id: &str, answer: &str) -> Result<bool, DatabaseError>;
}

const ROUND_SELECT: &str = "SELECT r.id, r.investigation_id, r.answer, r.created_at,
        q.id, q.english, q.czech, q.polish, q.topic, q.level
    FROM rounds r JOIN questions q ON q.id = r.question_id";

/// Insert a round row with an empty answer on `conn`, which may be an open
/// transaction.
pub(crate) async fn write_round(
    conn: &libsql::Connection,
    round: &Round,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO rounds (id, investigation_id, question_id, answer, created_at)
         VALUES (?1, ?2, ?3, '', ?4)",
        libsql::params![
            round.id.as_str(),
            round.investigation_id.as_str(),
            round.question.id.as_str(),
            format_datetime(&round.created_at)
        ],
    )
    .await?;
    Ok(())
}

impl SusDb {
    async fn row_to_round(&self, row: &libsql::Row) -> Result<Round, DatabaseError> {
        let id: String = row.get(0)?;
        let eliminations = self.eliminations_for_round(&id).await?;
        Ok(Round {
            id,
            investigation_id: row.get(1)?,
            answer: row.get(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
            question: row_to_question(row, 4)?,
            eliminations,
        })
    }
}

#[async_trait]
impl RoundRepo for SusDb {
    async fn insert_round(&self, round: &Round) -> Result<(), DatabaseError> {
        write_round(self.conn(), round).await
    }

    async fn get_round(&self, id: &str) -> Result<Round, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{ROUND_SELECT} WHERE r.id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        self.row_to_round(&row).await
    }

    async fn rounds_for_investigation(
        &self,
        investigation_id: &str,
    ) -> Result<Vec<Round>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "{ROUND_SELECT} WHERE r.investigation_id = ?1 ORDER BY r.created_at, r.rowid"
                ),
                [investigation_id],
            )
            .await?;
        let mut rounds = Vec::new();
        while let Some(row) = rows.next().await? {
            rounds.push(self.row_to_round(&row).await?);
        }
        Ok(rounds)
    }

    async fn get_answer(&self, round_id: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT answer FROM rounds WHERE id = ?1", [round_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    async fn save_answer(&self, round_id: &str, answer: &str) -> Result<bool, DatabaseError> {
        let updated = self
            .conn()
            .execute(
                "UPDATE rounds SET answer = ?1 WHERE id = ?2",
                libsql::params![answer, round_id],
            )
            .await?;
        Ok(updated > 0)
    }
}
