use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::question_store::QuestionStore;
use crate::store::KvBackend;

pub fn categories<B: KvBackend>(store: &QuestionStore<B>) -> Result<CmdResult> {
    let values = store.get_categories()?;
    Ok(with_empty_notice(values, "No categories yet."))
}

pub fn difficulties<B: KvBackend>(store: &QuestionStore<B>) -> Result<CmdResult> {
    let values = store.get_difficulties()?;
    Ok(with_empty_notice(values, "No difficulties yet."))
}

pub fn count<B: KvBackend>(store: &QuestionStore<B>) -> Result<CmdResult> {
    let count = store.count()?;
    Ok(CmdResult::default().with_values(vec![count.to_string()]))
}

fn with_empty_notice(values: Vec<String>, notice: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if values.is_empty() {
        result.add_message(CmdMessage::info(notice));
    }
    result.with_values(values)
}
