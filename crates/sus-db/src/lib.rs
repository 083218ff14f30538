//! # sus-db
//!
//! libSQL persistence for the Unusual Suspects engine.
//!
//! Holds every relational record of the game: the suspect roster, the
//! question bank, games, investigations with their ordered rosters, rounds,
//! eliminations, cached suspect descriptions, and provider services/models.
//!
//! Each entity has its own repository trait under [`repos`]; [`store::Store`]
//! bundles them so the engine and oracle can hold one `Arc<dyn Store>`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;

use error::DatabaseError;
use libsql::Builder;

pub use store::Store;

/// Central database handle for all game state.
///
/// Wraps a libSQL database and a single shared connection. Concurrent tasks
/// may call into it, but they share one session: a write issued while
/// another task holds a transaction open joins that transaction and is
/// discarded if it rolls back.
pub struct SusDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SusDb {
    /// Open a local database at the given path. Use `":memory:"` for tests.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let sus_db = Self { db, conn };
        sus_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(sus_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rnd-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    async fn test_db() -> SusDb {
        SusDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "suspects",
            "questions",
            "games",
            "investigations",
            "investigation_suspects",
            "rounds",
            "eliminations",
            "descriptions",
            "services",
            "models",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("rnd").await.unwrap();
        assert!(id.starts_with("rnd-"), "ID should start with 'rnd-': {id}");
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in sus_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();

        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM models WHERE active = 1", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn seeds_all_provider_services() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query("SELECT name FROM services ORDER BY name", ())
            .await
            .unwrap();
        let mut names = Vec::new();
        while let Some(row) = rows.next().await.unwrap() {
            names.push(row.get::<String>(0).unwrap());
        }
        assert_eq!(names, vec!["Anthropic", "DeepSeek", "Ollama", "OpenAI"]);
    }
}
