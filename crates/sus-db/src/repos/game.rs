//! Game repository.
//!
//! Games carry the running score and the investigator name. Score changes go
//! through a single `score = score + ?` update so concurrent increments never
//! lose each other.

use async_trait::async_trait;

use sus_core::entities::{FinalScore, Game};

use crate::SusDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};

#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn insert_game(&self, game: &Game) -> Result<(), DatabaseError>;

    async fn get_game(&self, id: &str) -> Result<Game, DatabaseError>;

    /// The most recently created game, if any.
    async fn latest_game(&self) -> Result<Option<Game>, DatabaseError>;

    /// Atomically add `delta` to the game's score.
    async fn add_score(&self, game_id: &str, delta: i64) -> Result<(), DatabaseError>;

    async fn set_investigator(&self, game_id: &str, investigator: &str)
    -> Result<(), DatabaseError>;

    /// All games by score, highest first, with 1-based positions.
    async fn list_scores(&self) -> Result<Vec<FinalScore>, DatabaseError>;
}

const GAME_COLUMNS: &str = "id, created_at, score, investigator";

fn row_to_game(row: &libsql::Row) -> Result<Game, DatabaseError> {
    Ok(Game {
        id: row.get(0)?,
        created_at: parse_datetime(&row.get::<String>(1)?)?,
        score: row.get(2)?,
        investigator: row.get(3)?,
    })
}

#[async_trait]
impl GameRepo for SusDb {
    async fn insert_game(&self, game: &Game) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO games (id, created_at, score, investigator) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    game.id.as_str(),
                    format_datetime(&game.created_at),
                    game.score,
                    game.investigator.as_str()
                ],
            )
            .await?;
        Ok(())
    }

    async fn get_game(&self, id: &str) -> Result<Game, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {GAME_COLUMNS} FROM games WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_game(&row)
    }

    async fn latest_game(&self) -> Result<Option<Game>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {GAME_COLUMNS} FROM games ORDER BY created_at DESC, rowid DESC LIMIT 1"
                ),
                (),
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_game(&row)?)),
            None => Ok(None),
        }
    }

    async fn add_score(&self, game_id: &str, delta: i64) -> Result<(), DatabaseError> {
        let updated = self
            .conn()
            .execute(
                "UPDATE games SET score = score + ?1 WHERE id = ?2",
                libsql::params![delta, game_id],
            )
            .await?;
        if updated == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    async fn set_investigator(
        &self,
        game_id: &str,
        investigator: &str,
    ) -> Result<(), DatabaseError> {
        let updated = self
            .conn()
            .execute(
                "UPDATE games SET investigator = ?1 WHERE id = ?2",
                libsql::params![investigator, game_id],
            )
            .await?;
        if updated == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    async fn list_scores(&self) -> Result<Vec<FinalScore>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, score, investigator FROM games
                 ORDER BY score DESC, created_at, rowid",
                (),
            )
            .await?;
        let mut scores = Vec::new();
        let mut position = 0;
        while let Some(row) = rows.next().await? {
            position += 1;
            scores.push(FinalScore {
                position,
                score: row.get(1)?,
                investigator: row.get(2)?,
                game_id: row.get(0)?,
            });
        }
        Ok(scores)
    }
}
