use crate::certificate::{file_name, render_svg};
use crate::commands::{Artifact, CmdMessage, CmdResult};
use crate::error::Result;
use crate::leaderboard::rank;
use crate::store::result_log::ResultLog;
use crate::store::KvBackend;
use chrono::{DateTime, Utc};

/// Render a certificate for the best recorded run of `player_name`.
pub fn run<B: KvBackend>(
    log: &ResultLog<B>,
    player_name: &str,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let wanted = player_name.trim();
    let results = log.all()?;
    let best = rank(&results)
        .into_iter()
        .find(|r| r.result.player_name == wanted);

    let mut result = CmdResult::default();
    let Some(best) = best else {
        result.add_message(CmdMessage::warning(format!(
            "No results recorded for {}",
            wanted
        )));
        return Ok(result);
    };

    let outcome = best.result;
    let artifact = Artifact {
        file_name: file_name(&outcome.player_name),
        content: render_svg(
            &outcome.player_name,
            outcome.score,
            outcome.total_questions,
            now,
        ),
    };
    result.add_message(CmdMessage::success(format!(
        "Certificate issued to {} ({}/{})",
        outcome.player_name, outcome.score, outcome.total_questions
    )));
    Ok(result.with_artifact(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizResult;
    use crate::store::mem_backend::MemBackend;

    fn outcome(name: &str, score: u32) -> QuizResult {
        QuizResult {
            player_name: name.into(),
            student_id: "S".into(),
            score,
            total_questions: 5,
            time_spent: 30,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn uses_best_run() {
        let mut log = ResultLog::new(MemBackend::new());
        log.append(outcome("neo", 2)).unwrap();
        log.append(outcome("neo", 5)).unwrap();
        log.append(outcome("trinity", 1)).unwrap();

        let result = run(&log, "neo", Utc::now()).unwrap();
        let artifact = result.artifact.unwrap();
        assert_eq!(artifact.file_name, "cybersecurity-certificate-neo.svg");
        assert!(artifact.content.contains("Score: 5/5 (100.0%)"));
        assert!(artifact.content.contains("ELITE HACKER"));
    }

    #[test]
    fn unknown_player_is_a_warning() {
        let log = ResultLog::new(MemBackend::new());
        let result = run(&log, "ghost", Utc::now()).unwrap();
        assert!(result.artifact.is_none());
        assert!(result.has_warnings());
    }
}
