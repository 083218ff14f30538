//! Investigation repository.
//!
//! An investigation row holds the culprit; its ordered roster lives in
//! `investigation_suspects`. Both are written in one transaction so a reader
//! never sees an investigation with a partial roster. A game opens an
//! investigation together with its first round, in that same transaction.

use async_trait::async_trait;

use sus_core::entities::{InvestigationRecord, Round};
use sus_core::rules::ROSTER_SIZE;

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};
use crate::repos::round::write_round;

#[async_trait]
pub trait InvestigationRepo: Send + Sync {
    /// Persist an investigation and its roster atomically.
    ///
    /// Rejects rosters that are not exactly [`ROSTER_SIZE`] distinct suspects
    /// or whose culprit is not among them.
    async fn insert_investigation(&self, record: &InvestigationRecord)
    -> Result<(), DatabaseError>;

    /// Persist an investigation, its roster, and its round 0 atomically.
    ///
    /// Nothing is written when any part is rejected, including a round that
    /// belongs to another investigation.
    async fn open_investigation(
        &self,
        record: &InvestigationRecord,
        first_round: &Round,
    ) -> Result<(), DatabaseError>;

    async fn get_investigation(&self, id: &str) -> Result<InvestigationRecord, DatabaseError>;

    /// The game's most recent investigation, if any.
    async fn latest_investigation(
        &self,
        game_id: &str,
    ) -> Result<Option<InvestigationRecord>, DatabaseError>;

    /// Number of investigations the game has had; this is the game's level.
    async fn count_investigations(&self, game_id: &str) -> Result<i64, DatabaseError>;
}

fn validate_roster(record: &InvestigationRecord) -> Result<(), DatabaseError> {
    if record.suspect_ids.len() != ROSTER_SIZE {
        return Err(DatabaseError::MalformedInvestigation(format!(
            "expected {ROSTER_SIZE} suspects, got {}",
            record.suspect_ids.len()
        )));
    }
    let mut seen = std::collections::HashSet::new();
    if let Some(dup) = record.suspect_ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(DatabaseError::MalformedInvestigation(format!(
            "suspect {dup} appears twice"
        )));
    }
    if !record.suspect_ids.contains(&record.culprit_id) {
        return Err(DatabaseError::MalformedInvestigation(format!(
            "culprit {} is not in the roster",
            record.culprit_id
        )));
    }
    Ok(())
}

async fn write_investigation(
    conn: &libsql::Connection,
    record: &InvestigationRecord,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO investigations (id, game_id, created_at, culprit_id)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            record.id.as_str(),
            record.game_id.as_str(),
            format_datetime(&record.created_at),
            record.culprit_id.as_str()
        ],
    )
    .await?;
    for (position, suspect_id) in (0_i64..).zip(&record.suspect_ids) {
        conn.execute(
            "INSERT INTO investigation_suspects (investigation_id, position, suspect_id)
             VALUES (?1, ?2, ?3)",
            libsql::params![record.id.as_str(), position, suspect_id.as_str()],
        )
        .await?;
    }
    Ok(())
}

impl SusDb {
    async fn hydrate_investigation(
        &self,
        row: &libsql::Row,
    ) -> Result<InvestigationRecord, DatabaseError> {
        let id: String = row.get(0)?;
        let mut rows = self
            .conn()
            .query(
                "SELECT suspect_id FROM investigation_suspects
                 WHERE investigation_id = ?1 ORDER BY position",
                [id.as_str()],
            )
            .await?;
        let mut suspect_ids = Vec::with_capacity(ROSTER_SIZE);
        while let Some(r) = rows.next().await? {
            suspect_ids.push(r.get::<String>(0)?);
        }
        Ok(InvestigationRecord {
            id,
            game_id: row.get(1)?,
            created_at: parse_datetime(&row.get::<String>(2)?)?,
            culprit_id: row.get(3)?,
            suspect_ids,
        })
    }
}

#[async_trait]
impl InvestigationRepo for SusDb {
    async fn insert_investigation(
        &self,
        record: &InvestigationRecord,
    ) -> Result<(), DatabaseError> {
        validate_roster(record)?;

        let tx = self.conn().transaction().await?;
        match write_investigation(&tx, record).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }

        tracing::debug!(
            investigation_id = %record.id,
            game_id = %record.game_id,
            "investigation stored"
        );
        Ok(())
    }

    async fn open_investigation(
        &self,
        record: &InvestigationRecord,
        first_round: &Round,
    ) -> Result<(), DatabaseError> {
        validate_roster(record)?;
        if first_round.investigation_id != record.id {
            return Err(DatabaseError::MalformedInvestigation(format!(
                "round {} belongs to {}, not {}",
                first_round.id, first_round.investigation_id, record.id
            )));
        }

        let tx = self.conn().transaction().await?;
        let written = async {
            write_investigation(&tx, record).await?;
            write_round(&tx, first_round).await
        }
        .await;

        match written {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }

        tracing::debug!(
            investigation_id = %record.id,
            round_id = %first_round.id,
            "investigation opened with first round"
        );
        Ok(())
    }

    async fn get_investigation(&self, id: &str) -> Result<InvestigationRecord, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, game_id, created_at, culprit_id FROM investigations WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        self.hydrate_investigation(&row).await
    }

    async fn latest_investigation(
        &self,
        game_id: &str,
    ) -> Result<Option<InvestigationRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, game_id, created_at, culprit_id FROM investigations
                 WHERE game_id = ?1 ORDER BY created_at DESC, rowid DESC LIMIT 1",
                [game_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(self.hydrate_investigation(&row).await?)),
            None => Ok(None),
        }
    }

    async fn count_investigations(&self, game_id: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM investigations WHERE game_id = ?1",
                [game_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }
}
