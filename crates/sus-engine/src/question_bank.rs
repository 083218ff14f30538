//! The question bank: built-in seed set and uniform draws with replacement.

use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;

use sus_core::entities::Question;
use sus_db::Store;

use crate::error::GameError;
use crate::questions::DEFAULT_QUESTIONS;

/// A built-in question before it has an id.
#[derive(Debug, Clone, Copy)]
pub struct SeedQuestion {
    pub english: &'static str,
    pub czech: &'static str,
    pub polish: &'static str,
    pub topic: &'static str,
    pub level: i64,
}

impl SeedQuestion {
    #[must_use]
    pub const fn new(
        english: &'static str,
        czech: &'static str,
        polish: &'static str,
        topic: &'static str,
        level: i64,
    ) -> Self {
        Self {
            english,
            czech,
            polish,
            topic,
            level,
        }
    }

    fn to_question(self) -> Question {
        Question {
            id: String::new(),
            english: self.english.to_string(),
            czech: self.czech.to_string(),
            polish: self.polish.to_string(),
            topic: self.topic.to_string(),
            level: self.level,
        }
    }
}

/// Pick one question uniformly. Every draw is independent, so repeats happen.
///
/// # Errors
///
/// Returns [`GameError::EmptyQuestionBank`] when `questions` is empty.
pub fn draw_question<R: Rng + ?Sized>(
    questions: &[Question],
    rng: &mut R,
) -> Result<Question, GameError> {
    questions
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyQuestionBank)
}

#[derive(Clone)]
pub struct QuestionBank {
    store: Arc<dyn Store>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// A uniformly drawn question from the store.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the store read fails or the bank is empty.
    pub async fn draw(&self) -> Result<Question, GameError> {
        let questions = self.store.list_questions().await?;
        let question = draw_question(&questions, &mut rand::rng())?;
        Ok(question)
    }

    /// Store the built-in questions, skipping ones already present by English
    /// text. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if an insert fails.
    pub async fn seed_defaults(&self) -> Result<usize, GameError> {
        let mut added = 0;
        for seed in DEFAULT_QUESTIONS {
            if self.store.save_question(&seed.to_question()).await? {
                added += 1;
            }
        }
        tracing::info!(added, total = DEFAULT_QUESTIONS.len(), "question bank seeded");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn bank(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: format!("que-{i}"),
                english: format!("Question {i}?"),
                czech: String::new(),
                polish: String::new(),
                topic: "basic".into(),
                level: 1,
            })
            .collect()
    }

    #[test]
    fn empty_bank_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(matches!(
            draw_question(&[], &mut rng),
            Err(GameError::EmptyQuestionBank)
        ));
    }

    #[test]
    fn draws_repeat_with_replacement() {
        let questions = bank(3);
        let mut rng = SmallRng::seed_from_u64(1);
        let drawn: Vec<String> = (0..20)
            .map(|_| draw_question(&questions, &mut rng).unwrap().id)
            .collect();
        let distinct: HashSet<&String> = drawn.iter().collect();
        assert!(distinct.len() <= 3);
        assert!(drawn.len() > distinct.len());
    }

    #[test]
    fn built_in_questions_are_unique_and_complete() {
        let english: HashSet<&str> = DEFAULT_QUESTIONS.iter().map(|q| q.english).collect();
        assert_eq!(english.len(), DEFAULT_QUESTIONS.len());
        assert!(DEFAULT_QUESTIONS.iter().all(|q| !q.english.is_empty()));
    }
}
