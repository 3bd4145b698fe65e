use crate::commands::{Artifact, CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{file_name, to_csv, to_json, ExportFormat};
use crate::store::result_log::ResultLog;
use crate::store::KvBackend;
use chrono::{DateTime, Utc};

pub fn run<B: KvBackend>(
    log: &ResultLog<B>,
    format: ExportFormat,
    prefix: &str,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let results = log.all()?;
    let content = match format {
        ExportFormat::Csv => to_csv(&results)?,
        ExportFormat::Json => to_json(&results, now)?,
    };
    let artifact = Artifact {
        file_name: file_name(prefix, format, now),
        content,
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} result(s) to {}",
        results.len(),
        artifact.file_name
    )));
    Ok(result.with_artifact(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizResult;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn csv_artifact_covers_the_log() {
        let mut log = ResultLog::new(MemBackend::new());
        log.append(QuizResult {
            player_name: "neo".into(),
            student_id: "S1".into(),
            score: 3,
            total_questions: 5,
            time_spent: 61,
            timestamp: Utc::now(),
        })
        .unwrap();

        let now = Utc::now();
        let result = run(&log, ExportFormat::Csv, "scores", now).unwrap();
        let artifact = result.artifact.unwrap();
        assert!(artifact.file_name.starts_with("scores-"));
        assert!(artifact.file_name.ends_with(".csv"));
        assert_eq!(artifact.content.lines().count(), 2);
        assert!(artifact.content.contains("\"60.0%\""));
    }

    #[test]
    fn json_artifact_of_empty_log() {
        let log = ResultLog::new(MemBackend::new());
        let result = run(&log, ExportFormat::Json, "scores", Utc::now()).unwrap();
        let artifact = result.artifact.unwrap();
        let value: serde_json::Value = serde_json::from_str(&artifact.content).unwrap();
        assert_eq!(value["totalResults"], 0);
        assert!(value["results"].as_array().unwrap().is_empty());
    }
}
