//! # API Facade
//!
//! [`QuizApi`] is the single entry point for every quizdb operation. The application
//! builds exactly one, handing it the storage backend and the loaded configuration,
//! and passes it to whatever needs it. There is no global instance.
//!
//! The facade owns both typed stores, which share one backend, and dispatches to the
//! command layer. It adds no logic of its own beyond wiring in configuration values
//! (time limit, export prefix) and the current time.
//!
//! `QuizApi<B: KvBackend + Clone>` is generic over the backend:
//! - Production: `QuizApi<FsBackend>`
//! - Testing: `QuizApi<MemBackend>`

use crate::commands;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::model::{QuestionFilter, QuestionInput, QuestionPatch};
use crate::session::QuizSession;
use crate::store::question_store::QuestionStore;
use crate::store::result_log::ResultLog;
use crate::store::KvBackend;
use chrono::Utc;

pub use crate::commands::{Artifact, CmdMessage, CmdResult, MessageLevel};

pub struct QuizApi<B: KvBackend + Clone> {
    questions: QuestionStore<B>,
    results: ResultLog<B>,
    config: QuizConfig,
}

impl<B: KvBackend + Clone> QuizApi<B> {
    /// Open both stores on `backend`. Seeds the question bank on first use.
    pub fn new(backend: B, config: QuizConfig) -> Result<Self> {
        let questions = QuestionStore::new(backend.clone())?;
        let results = ResultLog::new(backend);
        Ok(Self {
            questions,
            results,
            config,
        })
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn create_question(&mut self, input: QuestionInput) -> Result<CmdResult> {
        commands::create::run(&mut self.questions, input)
    }

    pub fn list_questions(&self, filter: &QuestionFilter) -> Result<CmdResult> {
        commands::get::run(&self.questions, filter)
    }

    pub fn view_questions(&self, ids: &[u64]) -> Result<CmdResult> {
        commands::get::view(&self.questions, ids)
    }

    pub fn update_question(&mut self, id: u64, patch: QuestionPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.questions, id, patch)
    }

    pub fn delete_questions(&mut self, ids: &[u64]) -> Result<CmdResult> {
        commands::delete::run(&mut self.questions, ids)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::catalog::categories(&self.questions)
    }

    pub fn difficulties(&self) -> Result<CmdResult> {
        commands::catalog::difficulties(&self.questions)
    }

    pub fn count(&self) -> Result<CmdResult> {
        commands::catalog::count(&self.questions)
    }

    /// Start a timed run over the whole question bank, freshly loaded.
    pub fn start_quiz(&self, player_name: &str, student_id: &str) -> Result<QuizSession> {
        let questions = self.questions.get_all()?;
        QuizSession::start(
            player_name,
            student_id,
            questions,
            self.config.time_limit,
            Utc::now(),
        )
    }

    /// Close a run and append its result to the log.
    pub fn finish_quiz(&mut self, session: QuizSession) -> Result<CmdResult> {
        let outcome = session.finish(Utc::now());
        commands::results::record(&mut self.results, outcome)
    }

    pub fn leaderboard(&self) -> Result<CmdResult> {
        commands::results::leaderboard(&self.results)
    }

    pub fn export_results(&self, format: ExportFormat) -> Result<CmdResult> {
        commands::export::run(
            &self.results,
            format,
            &self.config.export_prefix,
            Utc::now(),
        )
    }

    pub fn certificate(&self, player_name: &str) -> Result<CmdResult> {
        commands::certificate::run(&self.results, player_name, Utc::now())
    }

    pub fn reset(&mut self, include_results: bool) -> Result<CmdResult> {
        commands::reset::run(&mut self.questions, &mut self.results, include_results)
    }
}
