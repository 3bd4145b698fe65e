//! # Command Layer
//!
//! The business logic behind every user-facing operation. Each command lives in its
//! own submodule, takes the stores it needs, and returns a [`CmdResult`].
//!
//! Commands never print, prompt or exit. They validate caller input, call the stores, and describe
//! what happened through structured messages. How that is shown is the caller's business.
//!
//! A missing question is not an error here: lookups, updates and deletes of unknown
//! ids produce a warning message and an otherwise empty result.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a question
//! - [`get`]: List (with filters) and view questions
//! - [`update`]: Partially edit a question
//! - [`delete`]: Remove questions
//! - [`catalog`]: Categories, difficulties and counts
//! - [`results`]: Record results and build the leaderboard
//! - [`export`]: CSV / JSON exports of the result log
//! - [`certificate`]: Render a player's certificate
//! - [`reset`]: Wipe stored data

use crate::error::{QuizError, Result};
use crate::leaderboard::RankedResult;
use crate::model::{Question, QuestionInput, QuestionPatch, DIFFICULTIES};
use serde::Serialize;

pub mod catalog;
pub mod certificate;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod reset;
pub mod results;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A generated document: file name plus its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_questions: Vec<Question>,
    pub listed_questions: Vec<Question>,
    /// Plain values: category names, difficulty names, counts.
    pub values: Vec<String>,
    pub ranked_results: Vec<RankedResult>,
    pub artifact: Option<Artifact>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_questions(mut self, questions: Vec<Question>) -> Self {
        self.listed_questions = questions;
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}

fn require_text(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuizError::Validation(format!("{} is required", what)));
    }
    Ok(())
}

fn require_options(options: &[String]) -> Result<()> {
    if options.len() < 2 {
        return Err(QuizError::Validation(
            "At least two options are required".into(),
        ));
    }
    if options.iter().any(|o| o.trim().is_empty()) {
        return Err(QuizError::Validation("All options must be filled".into()));
    }
    Ok(())
}

/// Form-level checks run before a new question reaches the store.
/// The answer index is deliberately not bounds-checked.
pub fn validate_input(input: &QuestionInput) -> Result<()> {
    require_text(&input.question, "Question")?;
    require_options(&input.options)?;
    require_text(&input.category, "Category")?;
    require_text(&input.difficulty, "Difficulty")?;
    Ok(())
}

/// Same checks as [`validate_input`], applied to the fields a patch supplies.
pub fn validate_patch(patch: &QuestionPatch) -> Result<()> {
    if patch.is_empty() {
        return Err(QuizError::Validation("Nothing to update".into()));
    }
    if let Some(question) = &patch.question {
        require_text(question, "Question")?;
    }
    if let Some(options) = &patch.options {
        require_options(options)?;
    }
    if let Some(category) = &patch.category {
        require_text(category, "Category")?;
    }
    if let Some(difficulty) = &patch.difficulty {
        require_text(difficulty, "Difficulty")?;
    }
    Ok(())
}

/// Difficulties outside [`DIFFICULTIES`] are stored as given, with a warning.
pub fn difficulty_notice(difficulty: &str) -> Option<CmdMessage> {
    if DIFFICULTIES.contains(&difficulty.trim()) {
        return None;
    }
    Some(CmdMessage::warning(format!(
        "Difficulty '{}' is not one of {}",
        difficulty,
        DIFFICULTIES.join(", ")
    )))
}
