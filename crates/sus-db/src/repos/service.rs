//! Service and model repository.
//!
//! Services hold provider API tokens. Models belong to a service and exactly
//! one of them is active; switching is a single transaction.

use async_trait::async_trait;

use sus_core::entities::{Model, Service};

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::get_flag;

#[async_trait]
pub trait ServiceRepo: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, DatabaseError>;

    async fn get_service(&self, name: &str) -> Result<Service, DatabaseError>;

    /// Replace a service's API token.
    async fn save_token(&self, service: &str, token: &str) -> Result<(), DatabaseError>;

    async fn list_models(&self) -> Result<Vec<Model>, DatabaseError>;

    /// Register a model for an existing service. Existing names are left as is.
    async fn add_model(&self, name: &str, service: &str) -> Result<bool, DatabaseError>;

    /// The currently active model.
    async fn active_model(&self) -> Result<Model, DatabaseError>;

    /// Make `name` the only active model.
    async fn set_active_model(&self, name: &str) -> Result<(), DatabaseError>;
}

fn row_to_model(row: &libsql::Row) -> Result<Model, DatabaseError> {
    Ok(Model {
        name: row.get(0)?,
        service: row.get(1)?,
        active: get_flag(row, 2)?,
    })
}

#[async_trait]
impl ServiceRepo for SusDb {
    async fn list_services(&self) -> Result<Vec<Service>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT name, token FROM services ORDER BY name", ())
            .await?;
        let mut services = Vec::new();
        while let Some(row) = rows.next().await? {
            services.push(Service {
                name: row.get(0)?,
                token: row.get(1)?,
            });
        }
        Ok(services)
    }

    async fn get_service(&self, name: &str) -> Result<Service, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT name, token FROM services WHERE name = ?1", [name])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(Service {
            name: row.get(0)?,
            token: row.get(1)?,
        })
    }

    async fn save_token(&self, service: &str, token: &str) -> Result<(), DatabaseError> {
        let updated = self
            .conn()
            .execute(
                "UPDATE services SET token = ?1 WHERE name = ?2",
                libsql::params![token, service],
            )
            .await?;
        if updated == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(service, "service token updated");
        Ok(())
    }

    async fn list_models(&self) -> Result<Vec<Model>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT name, service, active FROM models ORDER BY service, name",
                (),
            )
            .await?;
        let mut models = Vec::new();
        while let Some(row) = rows.next().await? {
            models.push(row_to_model(&row)?);
        }
        Ok(models)
    }

    async fn add_model(&self, name: &str, service: &str) -> Result<bool, DatabaseError> {
        let written = self
            .conn()
            .execute(
                "INSERT INTO models (name, service, active) VALUES (?1, ?2, 0)
                 ON CONFLICT DO NOTHING",
                libsql::params![name, service],
            )
            .await?;
        Ok(written > 0)
    }

    async fn active_model(&self) -> Result<Model, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT name, service, active FROM models WHERE active = 1 LIMIT 1",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_model(&row)
    }

    async fn set_active_model(&self, name: &str) -> Result<(), DatabaseError> {
        let tx = self.conn().transaction().await?;
        tx.execute("UPDATE models SET active = 0", ()).await?;
        let updated = tx
            .execute("UPDATE models SET active = 1 WHERE name = ?1", [name])
            .await?;
        if updated == 0 {
            tx.rollback().await?;
            return Err(DatabaseError::NoResult);
        }
        tx.commit().await?;
        tracing::info!(model = name, "active model switched");
        Ok(())
    }
}
