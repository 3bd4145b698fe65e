use super::KvBackend;
use crate::error::{QuizError, Result};
use crate::model::QuizResult;

pub const RESULTS_KEY: &str = "hackQuizResults";

/// Append-only log of finished quiz runs. Entries are never deduplicated or pruned;
/// only [`ResultLog::clear`] removes them.
pub struct ResultLog<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> ResultLog<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn append(&mut self, result: QuizResult) -> Result<()> {
        let mut results = self.all()?;
        tracing::debug!(
            player = %result.player_name,
            score = result.score,
            total = result.total_questions,
            "recording quiz result"
        );
        results.push(result);
        let raw = serde_json::to_string(&results)?;
        self.backend.set(RESULTS_KEY, &raw)
    }

    /// Every recorded result, oldest first.
    pub fn all(&self) -> Result<Vec<QuizResult>> {
        let Some(raw) = self.backend.get(RESULTS_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| QuizError::Parse {
            key: RESULTS_KEY.to_string(),
            source,
        })
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(RESULTS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use chrono::Utc;

    fn result(name: &str, score: u32) -> QuizResult {
        QuizResult {
            player_name: name.to_string(),
            student_id: "STU001".to_string(),
            score,
            total_questions: 5,
            time_spent: 60,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_when_nothing_recorded() {
        let log = ResultLog::new(MemBackend::new());
        assert!(log.is_empty().unwrap());
    }

    #[test]
    fn appends_keep_order_and_duplicates() {
        let mut log = ResultLog::new(MemBackend::new());
        let first = result("trinity", 4);
        log.append(first.clone()).unwrap();
        log.append(result("neo", 5)).unwrap();
        log.append(first.clone()).unwrap();

        let all = log.all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], first);
        assert_eq!(all[1].player_name, "neo");
        assert_eq!(all[2], first);
    }

    #[test]
    fn shares_backend_with_other_stores() {
        let backend = MemBackend::new();
        let mut log = ResultLog::new(&backend);
        log.append(result("neo", 3)).unwrap();
        assert!(backend.contains_key(RESULTS_KEY));
    }

    #[test]
    fn clear_removes_everything() {
        let mut log = ResultLog::new(MemBackend::new());
        log.append(result("neo", 3)).unwrap();
        log.clear().unwrap();
        assert_eq!(log.len().unwrap(), 0);
    }

    #[test]
    fn corrupted_log_is_a_parse_failure() {
        let backend = MemBackend::new();
        backend.insert_raw(RESULTS_KEY, "[{]");
        let log = ResultLog::new(backend);
        assert!(matches!(log.all(), Err(QuizError::Parse { .. })));
    }
}
