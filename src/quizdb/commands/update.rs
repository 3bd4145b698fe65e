use crate::commands::{difficulty_notice, validate_patch, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::QuestionPatch;
use crate::store::question_store::QuestionStore;
use crate::store::KvBackend;

pub fn run<B: KvBackend>(
    store: &mut QuestionStore<B>,
    id: u64,
    patch: QuestionPatch,
) -> Result<CmdResult> {
    validate_patch(&patch)?;
    let notice = patch.difficulty.as_deref().and_then(difficulty_notice);

    let mut result = CmdResult::default();
    match store.update(id, patch)? {
        Some(question) => {
            result.add_message(CmdMessage::success(format!(
                "Question #{} updated",
                question.id
            )));
            if let Some(notice) = notice {
                result.add_message(notice);
            }
            result.affected_questions.push(question);
        }
        None => result.add_message(CmdMessage::warning(format!(
            "Question #{} not found",
            id
        ))),
    }
    Ok(result)
}
