use crate::commands::{difficulty_notice, validate_input, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::QuestionInput;
use crate::store::question_store::QuestionStore;
use crate::store::KvBackend;

pub fn run<B: KvBackend>(store: &mut QuestionStore<B>, input: QuestionInput) -> Result<CmdResult> {
    validate_input(&input)?;
    let question = store.create(input)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Question #{} created: {}",
        question.id, question.question
    )));
    if let Some(notice) = difficulty_notice(&question.difficulty) {
        result.add_message(notice);
    }
    result.affected_questions.push(question);
    Ok(result)
}
