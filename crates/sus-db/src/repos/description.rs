//! Description repository.
//!
//! Cached, provider-generated suspect profiles keyed by (suspect, service, model).

use async_trait::async_trait;

use sus_core::entities::Description;
use sus_core::ids::PREFIX_DESCRIPTION;

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};

#[async_trait]
pub trait DescriptionRepo: Send + Sync {
    /// Store a description. An empty id is replaced by a generated one.
    async fn save_description(&self, description: &Description) -> Result<String, DatabaseError>;

    /// Descriptions for a suspect under one service/model, oldest first.
    async fn descriptions_for(
        &self,
        suspect_id: &str,
        service: &str,
        model: &str,
    ) -> Result<Vec<Description>, DatabaseError>;
}

#[async_trait]
impl DescriptionRepo for SusDb {
    async fn save_description(&self, description: &Description) -> Result<String, DatabaseError> {
        let id = if description.id.is_empty() {
            self.generate_id(PREFIX_DESCRIPTION).await?
        } else {
            description.id.clone()
        };
        self.conn()
            .execute(
                "INSERT INTO descriptions
                   (id, suspect_id, service, model, description, prompt, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    description.suspect_id.as_str(),
                    description.service.as_str(),
                    description.model.as_str(),
                    description.description.as_str(),
                    description.prompt.as_str(),
                    format_datetime(&description.created_at)
                ],
            )
            .await?;
        Ok(id)
    }

    async fn descriptions_for(
        &self,
        suspect_id: &str,
        service: &str,
        model: &str,
    ) -> Result<Vec<Description>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, suspect_id, service, model, description, prompt, created_at
                 FROM descriptions
                 WHERE suspect_id = ?1 AND service = ?2 AND model = ?3
                 ORDER BY created_at, rowid",
                libsql::params![suspect_id, service, model],
            )
            .await?;
        let mut descriptions = Vec::new();
        while let Some(row) = rows.next().await? {
            descriptions.push(Description {
                id: row.get(0)?,
                suspect_id: row.get(1)?,
                service: row.get(2)?,
                model: row.get(3)?,
                description: row.get(4)?,
                prompt: row.get(5)?,
                created_at: parse_datetime(&row.get::<String>(6)?)?,
            });
        }
        Ok(descriptions)
    }
}
