//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements are idempotent so re-running is safe.

use crate::SusDb;
use crate::error::DatabaseError;

/// Initial schema: 10 tables, 4 indexes, seeded services and models.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl SusDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
