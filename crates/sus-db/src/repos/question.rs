//! Question repository.
//!
//! The multilingual question bank. Questions are unique by their English text.

use async_trait::async_trait;

use sus_core::entities::Question;
use sus_core::ids::PREFIX_QUESTION;

use crate::SusDb;
use crate::error::DatabaseError;

#[async_trait]
pub trait QuestionRepo: Send + Sync {
    /// Insert a question unless one with the same English text exists.
    ///
    /// An empty id is replaced by a generated one. Returns `true` when a row
    /// was written.
    async fn save_question(&self, question: &Question) -> Result<bool, DatabaseError>;

    async fn get_question(&self, id: &str) -> Result<Question, DatabaseError>;

    async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError>;

    async fn count_questions(&self) -> Result<i64, DatabaseError>;
}

pub(crate) const QUESTION_COLUMNS: &str = "id, english, czech, polish, topic, level";

pub(crate) fn row_to_question(row: &libsql::Row, offset: i32) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(offset)?,
        english: row.get(offset + 1)?,
        czech: row.get(offset + 2)?,
        polish: row.get(offset + 3)?,
        topic: row.get(offset + 4)?,
        level: row.get(offset + 5)?,
    })
}

#[async_trait]
impl QuestionRepo for SusDb {
    async fn save_question(&self, question: &Question) -> Result<bool, DatabaseError> {
        if question.english.trim().is_empty() {
            return Err(DatabaseError::InvalidState(
                "question needs English text".into(),
            ));
        }
        let id = if question.id.is_empty() {
            self.generate_id(PREFIX_QUESTION).await?
        } else {
            question.id.clone()
        };
        let written = self
            .conn()
            .execute(
                "INSERT INTO questions (id, english, czech, polish, topic, level)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT DO NOTHING",
                libsql::params![
                    id,
                    question.english.as_str(),
                    question.czech.as_str(),
                    question.polish.as_str(),
                    question.topic.as_str(),
                    question.level
                ],
            )
            .await?;
        Ok(written > 0)
    }

    async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row, 0)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY rowid"),
                (),
            )
            .await?;
        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row, 0)?);
        }
        Ok(questions)
    }

    async fn count_questions(&self) -> Result<i64, DatabaseError> {
        let mut rows = self.conn().query("SELECT COUNT(*) FROM questions", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pizza() -> Question {
        Question {
            id: String::new(),
            english: "Does the suspect like pizza?".into(),
            czech: "Má podezřelý rád pizzu?".into(),
            polish: "Czy podejrzany lubi pizzę?".into(),
            topic: "basic".into(),
            level: 1,
        }
    }

    #[tokio::test]
    async fn save_generates_id_and_dedupes_by_english() {
        let db = SusDb::open_local(":memory:").await.unwrap();
        assert!(db.save_question(&pizza()).await.unwrap());
        assert!(!db.save_question(&pizza()).await.unwrap());

        let stored = db.list_questions().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].id.starts_with("que-"));
        assert_eq!(stored[0].polish, "Czy podejrzany lubi pizzę?");

        let fetched = db.get_question(&stored[0].id).await.unwrap();
        assert_eq!(fetched, stored[0]);
    }

    #[tokio::test]
    async fn blank_question_is_rejected() {
        let db = SusDb::open_local(":memory:").await.unwrap();
        let blank = Question {
            english: "  ".into(),
            ..pizza()
        };
        assert!(db.save_question(&blank).await.is_err());
        assert_eq!(db.count_questions().await.unwrap(), 0);
    }
}
