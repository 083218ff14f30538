//! Suspect repository.
//!
//! The roster table. A suspect's id is its portrait file stem and the image
//! name is unique, so re-importing a portrait directory is a no-op.

use async_trait::async_trait;

use sus_core::entities::Suspect;

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};

#[async_trait]
pub trait SuspectRepo: Send + Sync {
    /// Insert a suspect unless one with the same image exists.
    ///
    /// Returns `true` when a row was written.
    async fn save_suspect(&self, suspect: &Suspect) -> Result<bool, DatabaseError>;

    async fn get_suspect(&self, id: &str) -> Result<Suspect, DatabaseError>;

    /// All suspects, oldest first.
    async fn list_suspects(&self) -> Result<Vec<Suspect>, DatabaseError>;

    async fn count_suspects(&self) -> Result<i64, DatabaseError>;

    /// Suspects with fewer than `limit` descriptions for the service/model pair.
    async fn suspects_lacking_descriptions(
        &self,
        limit: i64,
        service: &str,
        model: &str,
    ) -> Result<Vec<Suspect>, DatabaseError>;
}

fn row_to_suspect(row: &libsql::Row) -> Result<Suspect, DatabaseError> {
    Ok(Suspect {
        id: row.get(0)?,
        image: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        free: false,
        fled: false,
    })
}

async fn collect_suspects(mut rows: libsql::Rows) -> Result<Vec<Suspect>, DatabaseError> {
    let mut suspects = Vec::new();
    while let Some(row) = rows.next().await? {
        suspects.push(row_to_suspect(&row)?);
    }
    Ok(suspects)
}

#[async_trait]
impl SuspectRepo for SusDb {
    async fn save_suspect(&self, suspect: &Suspect) -> Result<bool, DatabaseError> {
        if suspect.id.is_empty() || suspect.image.is_empty() {
            return Err(DatabaseError::InvalidState(
                "suspect needs both an id and an image".into(),
            ));
        }
        let written = self
            .conn()
            .execute(
                "INSERT INTO suspects (id, image, created_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT DO NOTHING",
                libsql::params![
                    suspect.id.as_str(),
                    suspect.image.as_str(),
                    format_datetime(&suspect.created_at)
                ],
            )
            .await?;
        if written == 0 {
            tracing::debug!(image = %suspect.image, "suspect already stored");
        }
        Ok(written > 0)
    }

    async fn get_suspect(&self, id: &str) -> Result<Suspect, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, image, created_at FROM suspects WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_suspect(&row)
    }

    async fn list_suspects(&self) -> Result<Vec<Suspect>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT id, image, created_at FROM suspects ORDER BY created_at, rowid",
                (),
            )
            .await?;
        collect_suspects(rows).await
    }

    async fn count_suspects(&self) -> Result<i64, DatabaseError> {
        let mut rows = self.conn().query("SELECT COUNT(*) FROM suspects", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }

    async fn suspects_lacking_descriptions(
        &self,
        limit: i64,
        service: &str,
        model: &str,
    ) -> Result<Vec<Suspect>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT s.id, s.image, s.created_at FROM suspects s
                 LEFT JOIN descriptions d
                   ON d.suspect_id = s.id AND d.service = ?2 AND d.model = ?3
                 GROUP BY s.id
                 HAVING COUNT(d.id) < ?1
                 ORDER BY s.created_at, s.rowid",
                libsql::params![limit, service, model],
            )
            .await?;
        collect_suspects(rows).await
    }
}
