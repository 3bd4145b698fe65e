//! # Result Export
//!
//! Two flat documents built from the result log:
//!
//! - **CSV**, one row per result:
//!   ```text
//!   Player Name,Score,Total Questions,Percentage,Time Spent,Date
//!   "neo",4,5,"80.0%","01:30","5/1/2024"
//!   ```
//! - **JSON**, `{ exportDate, totalResults, results }` where each result also carries
//!   its `percentage` (one decimal, as a string).
//!
//! Both keep log order; ranking is the leaderboard's business.

use crate::error::{QuizError, Result};
use crate::leaderboard::format_clock;
use crate::model::QuizResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;

pub const CSV_HEADER: [&str; 6] = [
    "Player Name",
    "Score",
    "Total Questions",
    "Percentage",
    "Time Spent",
    "Date",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    export_date: DateTime<Utc>,
    total_results: usize,
    results: Vec<ExportedResult<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportedResult<'a> {
    #[serde(flatten)]
    result: &'a QuizResult,
    percentage: String,
}

fn percentage_label(result: &QuizResult) -> String {
    format!("{:.1}", result.percentage())
}

/// Header row bare, data rows with every non-numeric field quoted. No trailing newline.
pub fn to_csv(results: &[QuizResult]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for result in results {
        writer.write_record([
            result.player_name.clone(),
            result.score.to_string(),
            result.total_questions.to_string(),
            format!("{}%", percentage_label(result)),
            format_clock(result.time_spent),
            result.timestamp.format("%-m/%-d/%Y").to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| QuizError::Io(e.into_error()))?;
    let rows = String::from_utf8(bytes)
        .map_err(|e| QuizError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    let mut out = CSV_HEADER.join(",");
    if !rows.is_empty() {
        out.push('\n');
        out.push_str(rows.trim_end_matches('\n'));
    }
    Ok(out)
}

pub fn to_json(results: &[QuizResult], exported_at: DateTime<Utc>) -> Result<String> {
    let document = ExportDocument {
        export_date: exported_at,
        total_results: results.len(),
        results: results
            .iter()
            .map(|result| ExportedResult {
                result,
                percentage: percentage_label(result),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// `<prefix>-YYYY-MM-DD.<ext>`
pub fn file_name(prefix: &str, format: ExportFormat, date: DateTime<Utc>) -> String {
    format!(
        "{}-{}.{}",
        prefix,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
