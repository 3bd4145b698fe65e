use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::leaderboard::{format_duration, rank};
use crate::model::QuizResult;
use crate::store::result_log::ResultLog;
use crate::store::KvBackend;

pub fn record<B: KvBackend>(log: &mut ResultLog<B>, outcome: QuizResult) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} scored {}/{} ({:.1}%) in {}",
        outcome.player_name,
        outcome.score,
        outcome.total_questions,
        outcome.percentage(),
        format_duration(outcome.time_spent)
    )));
    log.append(outcome)?;
    Ok(result)
}

pub fn leaderboard<B: KvBackend>(log: &ResultLog<B>) -> Result<CmdResult> {
    let results = log.all()?;
    let mut result = CmdResult::default();
    if results.is_empty() {
        result.add_message(CmdMessage::info("No hacks recorded."));
    }
    result.ranked_results = rank(&results);
    Ok(result)
}
