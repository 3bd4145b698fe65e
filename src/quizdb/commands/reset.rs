use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::question_store::QuestionStore;
use crate::store::result_log::ResultLog;
use crate::store::KvBackend;

/// Clear the question collection and id counter, and the result log if asked.
/// The seed set comes back the next time a store is opened.
pub fn run<B: KvBackend>(
    store: &mut QuestionStore<B>,
    log: &mut ResultLog<B>,
    include_results: bool,
) -> Result<CmdResult> {
    store.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Question database cleared"));

    if include_results {
        log.clear()?;
        result.add_message(CmdMessage::success("Result log cleared"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizResult;
    use crate::store::mem_backend::MemBackend;
    use chrono::Utc;

    fn setup() -> (QuestionStore<MemBackend>, ResultLog<MemBackend>) {
        let backend = MemBackend::new();
        let store = QuestionStore::new(backend.clone()).unwrap();
        let mut log = ResultLog::new(backend);
        log.append(QuizResult {
            player_name: "neo".into(),
            student_id: "S".into(),
            score: 1,
            total_questions: 1,
            time_spent: 1,
            timestamp: Utc::now(),
        })
        .unwrap();
        (store, log)
    }

    #[test]
    fn keeps_results_by_default() {
        let (mut store, mut log) = setup();
        run(&mut store, &mut log, false).unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(log.len().unwrap(), 1);
    }

    #[test]
    fn clears_results_when_asked() {
        let (mut store, mut log) = setup();
        let result = run(&mut store, &mut log, true).unwrap();
        assert_eq!(log.len().unwrap(), 0);
        assert_eq!(result.messages.len(), 2);
    }
}
