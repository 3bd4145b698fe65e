//! # Quiz Session
//!
//! A single timed run through a list of questions. The session holds no clock of its
//! own: every time-dependent call takes `now`, so the caller decides where time comes
//! from (the CLI passes `Utc::now()`, tests pass fixed instants).
//!
//! The time budget covers the whole run, not each question. Once it is spent the
//! session is over and any further answer is reported as [`AnswerOutcome::TimeUp`].

use crate::error::{QuizError, Result};
use crate::model::{Question, QuizResult};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TIME_LIMIT_SECS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_answer: usize },
    TimeUp,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    player_name: String,
    student_id: String,
    questions: Vec<Question>,
    answers: Vec<usize>,
    score: u32,
    started_at: DateTime<Utc>,
    time_limit: Duration,
    timed_out: bool,
}

impl QuizSession {
    pub fn start(
        player_name: &str,
        student_id: &str,
        questions: Vec<Question>,
        time_limit_secs: u64,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let player_name = player_name.trim();
        let student_id = student_id.trim();
        if player_name.is_empty() {
            return Err(QuizError::Validation("Player name is required".into()));
        }
        if student_id.is_empty() {
            return Err(QuizError::Validation("Student ID is required".into()));
        }
        if questions.is_empty() {
            return Err(QuizError::Validation(
                "There are no questions to play".into(),
            ));
        }

        let secs = i64::try_from(time_limit_secs).unwrap_or(i64::MAX);
        Ok(Self {
            player_name: player_name.to_string(),
            student_id: student_id.to_string(),
            answers: Vec::with_capacity(questions.len()),
            questions,
            score: 0,
            started_at: now,
            time_limit: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            timed_out: false,
        })
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// 1-based number of the current question and the total.
    pub fn position(&self) -> (usize, usize) {
        ((self.answers.len() + 1).min(self.total()), self.total())
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.timed_out {
            return None;
        }
        self.questions.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.timed_out || self.answers.len() >= self.questions.len()
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        let elapsed = now.signed_duration_since(self.started_at);
        let capped = elapsed.min(self.time_limit).max(Duration::zero());
        u64::try_from(capped.num_seconds()).unwrap_or(0)
    }

    pub fn time_left(&self, now: DateTime<Utc>) -> u64 {
        let limit = u64::try_from(self.time_limit.num_seconds()).unwrap_or(0);
        limit.saturating_sub(self.elapsed_secs(now))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.timed_out || self.time_left(now) == 0
    }

    /// Submit `choice` (0-based) for the current question and advance.
    pub fn answer(&mut self, choice: usize, now: DateTime<Utc>) -> Result<AnswerOutcome> {
        if self.is_expired(now) {
            self.timed_out = true;
            return Ok(AnswerOutcome::TimeUp);
        }
        let Some(question) = self.current_question() else {
            return Err(QuizError::Validation("The quiz is already complete".into()));
        };

        let outcome = if question.is_correct(choice) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                correct_answer: question.correct_answer,
            }
        };
        if outcome == AnswerOutcome::Correct {
            self.score += 1;
        }
        self.answers.push(choice);
        Ok(outcome)
    }

    /// Close the run and produce its result. Time spent is capped at the limit.
    pub fn finish(self, now: DateTime<Utc>) -> QuizResult {
        QuizResult {
            time_spent: self.elapsed_secs(now),
            player_name: self.player_name,
            student_id: self.student_id,
            score: self.score,
            total_questions: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
            timestamp: now,
        }
    }
}
