use crate::model::QuizResult;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyTier {
    High,
    Medium,
    Low,
}

impl AccuracyTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            AccuracyTier::High
        } else if percentage >= 60.0 {
            AccuracyTier::Medium
        } else {
            AccuracyTier::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub rank: usize,
    pub percentage: f64,
    pub tier: AccuracyTier,
    #[serde(flatten)]
    pub result: QuizResult,
}

/// Order results best-first: higher accuracy wins, then the faster run.
pub fn rank(results: &[QuizResult]) -> Vec<RankedResult> {
    let mut sorted: Vec<&QuizResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        b.percentage()
            .partial_cmp(&a.percentage())
            .unwrap_or(Ordering::Equal)
            .then(a.time_spent.cmp(&b.time_spent))
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, result)| {
            let percentage = result.percentage();
            RankedResult {
                rank: i + 1,
                percentage,
                tier: AccuracyTier::from_percentage(percentage),
                result: result.clone(),
            }
        })
        .collect()
}

/// `m:ss`, as shown on the leaderboard.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `mm:ss`, as shown on the timer and in exports.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(name: &str, score: u32, total: u32, time_spent: u64) -> QuizResult {
        QuizResult {
            player_name: name.to_string(),
            student_id: String::new(),
            score,
            total_questions: total,
            time_spent,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn ranks_by_accuracy_then_time() {
        let results = vec![
            result("slow-perfect", 5, 5, 200),
            result("half", 1, 2, 10),
            result("fast-perfect", 4, 4, 90),
            result("most", 4, 5, 30),
        ];
        let names: Vec<String> = rank(&results)
            .into_iter()
            .map(|r| r.result.player_name)
            .collect();
        assert_eq!(names, vec!["fast-perfect", "slow-perfect", "most", "half"]);
    }

    #[test]
    fn ranks_are_one_based() {
        let ranked = rank(&[result("a", 1, 1, 1), result("b", 0, 1, 1)]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].tier, AccuracyTier::Low);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(AccuracyTier::from_percentage(80.0), AccuracyTier::High);
        assert_eq!(AccuracyTier::from_percentage(79.9), AccuracyTier::Medium);
        assert_eq!(AccuracyTier::from_percentage(60.0), AccuracyTier::Medium);
        assert_eq!(AccuracyTier::from_percentage(59.9), AccuracyTier::Low);
    }

    #[test]
    fn formats_times() {
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(300), "05:00");
    }
}
