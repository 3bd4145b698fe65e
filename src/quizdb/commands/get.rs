use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::QuestionFilter;
use crate::store::question_store::QuestionStore;
use crate::store::KvBackend;

/// List questions matching `filter`, in creation order.
pub fn run<B: KvBackend>(store: &QuestionStore<B>, filter: &QuestionFilter) -> Result<CmdResult> {
    let questions = store.filter(filter)?;
    let mut result = CmdResult::default();
    if questions.is_empty() {
        result.add_message(CmdMessage::info("No questions found."));
    }
    Ok(result.with_listed_questions(questions))
}

/// Look up questions by id. Unknown ids produce a warning each.
pub fn view<B: KvBackend>(store: &QuestionStore<B>, ids: &[u64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &id in ids {
        match store.get_by_id(id)? {
            Some(question) => result.listed_questions.push(question),
            None => result.add_message(CmdMessage::warning(format!(
                "Question #{} not found",
                id
            ))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> QuestionStore<MemBackend> {
        QuestionStore::new(MemBackend::new()).unwrap()
    }

    #[test]
    fn lists_everything_without_filter() {
        let store = make_store();
        let result = run(&store, &QuestionFilter::default()).unwrap();
        assert_eq!(result.listed_questions.len(), 5);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_filter_result_is_informational() {
        let store = make_store();
        let result = run(&store, &QuestionFilter::category("Nope")).unwrap();
        assert!(result.listed_questions.is_empty());
        assert!(!result.has_warnings());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn view_mixes_hits_and_misses() {
        let store = make_store();
        let result = view(&store, &[2, 99, 4]).unwrap();
        let ids: Vec<u64> = result.listed_questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(result.has_warnings());
        assert!(result.messages[0].content.contains("#99"));
    }
}
