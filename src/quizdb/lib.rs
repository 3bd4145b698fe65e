//! # quizdb Architecture
//!
//! quizdb is a timed quiz runner built around a small persisted question bank. The
//! library holds all behavior; the `quizdb` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, plays the quiz         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One QuizApi per process, built with an injected backend  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input validation, structured CmdResult values            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KvBackend: get/set/remove over string blobs              │
//! │  - QuestionStore, ResultLog on top of it                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Question Store invariants
//!
//! - Ids are unique for the lifetime of the stored data and strictly increasing.
//! - The id counter never moves backwards.
//! - After any mutation the persisted blob equals the in-memory collection.
//! - The seed set is installed at most once: only when the collection key is absent.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Key-value backends, the question store and the result log
//! - [`model`]: `Question`, `QuestionInput`, `QuestionPatch`, `QuizResult`
//! - [`seed`]: The default question set
//! - [`session`]: A timed quiz run
//! - [`leaderboard`]: Ranking and time formatting
//! - [`export`]: CSV / JSON result exports
//! - [`certificate`]: SVG certificates
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod certificate;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod leaderboard;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
