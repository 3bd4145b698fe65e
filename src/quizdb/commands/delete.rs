use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::question_store::QuestionStore;
use crate::store::KvBackend;

pub fn run<B: KvBackend>(store: &mut QuestionStore<B>, ids: &[u64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &id in ids {
        let Some(question) = store.get_by_id(id)? else {
            result.add_message(CmdMessage::warning(format!(
                "Question #{} not found",
                id
            )));
            continue;
        };
        if store.delete(id)? {
            result.add_message(CmdMessage::success(format!(
                "Question #{} deleted: {}",
                id, question.question
            )));
            result.affected_questions.push(question);
        }
    }
    Ok(result)
}
