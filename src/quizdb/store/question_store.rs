//! # Question Store
//!
//! Durable CRUD and query access over the question collection.
//!
//! The whole collection is one JSON array under [`QUESTIONS_KEY`]. Every read decodes
//! it, every mutation rewrites it. Ids come from a separate decimal counter under
//! [`NEXT_ID_KEY`] that only ever moves forward.
//!
//! ## Seeding
//!
//! [`QuestionStore::new`] runs [`QuestionStore::initialize`]: when the collection key
//! is absent the seed set (ids `1..=5`) is written and the counter set to `6`. Once
//! the key exists, even holding an empty array, nothing is ever seeded again.
//!
//! ## Misses
//!
//! A lookup, update or delete of an unknown id is an ordinary outcome and comes back
//! as `None` / `false`. Only storage and decoding failures are errors.

use super::KvBackend;
use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionFilter, QuestionInput, QuestionPatch};
use crate::seed::{seed_questions, SEED_COUNT};
use chrono::Utc;
use std::collections::BTreeSet;

pub const QUESTIONS_KEY: &str = "cyberpunk-quiz-questions";
pub const NEXT_ID_KEY: &str = "cyberpunk-quiz-next-id";

pub struct QuestionStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> QuestionStore<B> {
    /// Open the store, seeding it if the collection has never been written.
    pub fn new(backend: B) -> Result<Self> {
        let store = Self { backend };
        store.initialize()?;
        Ok(store)
    }

    /// Install the seed set if the collection key is absent.
    /// Returns whether seeding happened.
    pub fn initialize(&self) -> Result<bool> {
        if self.backend.get(QUESTIONS_KEY)?.is_some() {
            return Ok(false);
        }

        let seed = seed_questions(Utc::now());
        self.save_questions(&seed)?;
        self.backend
            .set(NEXT_ID_KEY, &(SEED_COUNT + 1).to_string())?;
        tracing::debug!(count = seed.len(), "seeded question store");
        Ok(true)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn create(&mut self, input: QuestionInput) -> Result<Question> {
        let mut questions = self.load_questions()?;
        let id = self.allocate_id(&questions)?;

        let question = Question::from_input(id, input, Utc::now());
        questions.push(question.clone());
        self.save_questions(&questions)?;

        tracing::debug!(id, category = %question.category, "created question");
        Ok(question)
    }

    /// All questions in creation order.
    pub fn get_all(&self) -> Result<Vec<Question>> {
        self.load_questions()
    }

    pub fn get_by_id(&self, id: u64) -> Result<Option<Question>> {
        Ok(self.load_questions()?.into_iter().find(|q| q.id == id))
    }

    pub fn get_by_category(&self, category: &str) -> Result<Vec<Question>> {
        self.filter(&QuestionFilter::category(category))
    }

    pub fn get_by_difficulty(&self, difficulty: &str) -> Result<Vec<Question>> {
        self.filter(&QuestionFilter::difficulty(difficulty))
    }

    pub fn filter(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        Ok(self
            .load_questions()?
            .into_iter()
            .filter(|q| filter.matches(q))
            .collect())
    }

    pub fn update(&mut self, id: u64, patch: QuestionPatch) -> Result<Option<Question>> {
        let mut questions = self.load_questions()?;
        let Some(question) = questions.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };

        patch.apply(question, Utc::now());
        let updated = question.clone();
        self.save_questions(&questions)?;

        tracing::debug!(id, "updated question");
        Ok(Some(updated))
    }

    /// Remove a question permanently. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let mut questions = self.load_questions()?;
        let before = questions.len();
        questions.retain(|q| q.id != id);

        if questions.len() == before {
            return Ok(false);
        }

        self.save_questions(&questions)?;
        tracing::debug!(id, "deleted question");
        Ok(true)
    }

    /// Distinct categories, sorted.
    pub fn get_categories(&self) -> Result<Vec<String>> {
        let questions = self.load_questions()?;
        let set: BTreeSet<String> = questions.into_iter().map(|q| q.category).collect();
        Ok(set.into_iter().collect())
    }

    /// Distinct difficulties, sorted.
    pub fn get_difficulties(&self) -> Result<Vec<String>> {
        let questions = self.load_questions()?;
        let set: BTreeSet<String> = questions.into_iter().map(|q| q.difficulty).collect();
        Ok(set.into_iter().collect())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.load_questions()?.len())
    }

    /// Drop the collection and the id counter.
    pub fn reset(&mut self) -> Result<()> {
        self.backend.remove(QUESTIONS_KEY)?;
        self.backend.remove(NEXT_ID_KEY)?;
        tracing::debug!("question store reset");
        Ok(())
    }

    /// Read the counter, persist its successor and hand out the current value.
    /// Never returns an id at or below one already in `questions`.
    fn allocate_id(&self, questions: &[Question]) -> Result<u64> {
        let counter = match self.backend.get(NEXT_ID_KEY)? {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| QuizError::CorruptCounter {
                    key: NEXT_ID_KEY.to_string(),
                    value: raw.clone(),
                })?,
            None => 1,
        };
        let floor = match questions.iter().map(|q| q.id).max() {
            Some(max) => max.checked_add(1).ok_or(QuizError::IdsExhausted(max))?,
            None => 1,
        };
        let id = counter.max(floor);
        let next = id.checked_add(1).ok_or_else(|| QuizError::CorruptCounter {
            key: NEXT_ID_KEY.to_string(),
            value: id.to_string(),
        })?;

        self.backend.set(NEXT_ID_KEY, &next.to_string())?;
        Ok(id)
    }

    fn load_questions(&self) -> Result<Vec<Question>> {
        let Some(raw) = self.backend.get(QUESTIONS_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| QuizError::Parse {
            key: QUESTIONS_KEY.to_string(),
            source,
        })
    }

    fn save_questions(&self, questions: &[Question]) -> Result<()> {
        let raw = serde_json::to_string(questions)?;
        self.backend.set(QUESTIONS_KEY, &raw)
    }
}
