//! # Storage Layer
//!
//! Everything quizdb persists goes through a flat, string-keyed blob store: the
//! [`KvBackend`] trait. It has three operations (`get`, `set`, `remove`) and knows
//! nothing about questions or results. The typed stores on top of it decode the blobs
//! into Rust types once, at load time.
//!
//! ## Keys
//!
//! | Key | Owner | Content |
//! |-----|-------|---------|
//! | `cyberpunk-quiz-questions` | [`question_store::QuestionStore`] | JSON array of questions |
//! | `cyberpunk-quiz-next-id` | [`question_store::QuestionStore`] | next id, decimal string |
//! | `hackQuizResults` | [`result_log::ResultLog`] | JSON array of quiz results |
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key inside a data directory. Writes go to
//!   a temp file first and are renamed into place, so readers never see half a blob.
//! - [`mem_backend::MemBackend`]: in-memory map for tests, with switches that make
//!   reads or writes fail.
//!
//! Every mutation rewrites the whole blob for its key. There is no partial update and
//! no rollback: a failed `set` leaves the previous blob in place.

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;
pub mod question_store;
pub mod result_log;

/// Raw key-value persistence.
///
/// All methods take `&self`; implementations that hold state use interior
/// mutability (quizdb is single-threaded).
pub trait KvBackend {
    /// Returns `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: KvBackend + ?Sized> KvBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
