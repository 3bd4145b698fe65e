use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Conventional difficulty labels. The store accepts any string.
pub const DIFFICULTIES: [&str; 3] = ["Basic", "Intermediate", "Advanced"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    pub question: String,
    #[serde(deserialize_with = "deserialize_options")]
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub category: String,
    pub difficulty: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn from_input(id: u64, input: QuestionInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            question: input.question,
            options: input.options,
            correct_answer: input.correct_answer,
            category: input.category,
            difficulty: input.difficulty,
            created_at: now,
            updated_at: now,
        }
    }

    /// The text of the correct option, if `correct_answer` is in bounds.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

// Older writers stored `options` as a string holding a JSON array.
// Both shapes are folded into a plain list here and nowhere else.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredOptions {
    List(Vec<String>),
    Encoded(String),
}

fn deserialize_options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredOptions::deserialize(deserializer)? {
        StoredOptions::List(options) => Ok(options),
        StoredOptions::Encoded(raw) => {
            serde_json::from_str(&raw).map_err(serde::de::Error::custom)
        }
    }
}

/// Caller-supplied fields of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub category: String,
    pub difficulty: String,
}

impl QuestionInput {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer,
            category: category.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// Partial replacement for an existing question. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<usize>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionPatch {
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_correct_answer(mut self, correct_answer: usize) -> Self {
        self.correct_answer = Some(correct_answer);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.options.is_none()
            && self.correct_answer.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
    }

    /// Merge the supplied fields over `question` and stamp `updated_at`.
    pub fn apply(self, question: &mut Question, now: DateTime<Utc>) {
        if let Some(text) = self.question {
            question.question = text;
        }
        if let Some(options) = self.options {
            question.options = options;
        }
        if let Some(correct_answer) = self.correct_answer {
            question.correct_answer = correct_answer;
        }
        if let Some(category) = self.category {
            question.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            question.difficulty = difficulty;
        }
        question.updated_at = now;
    }
}

impl From<QuestionInput> for QuestionPatch {
    fn from(input: QuestionInput) -> Self {
        Self {
            question: Some(input.question),
            options: Some(input.options),
            correct_answer: Some(input.correct_answer),
            category: Some(input.category),
            difficulty: Some(input.difficulty),
        }
    }
}

/// Exact-match filter. Both criteria must hold when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            difficulty: None,
        }
    }

    pub fn difficulty(difficulty: impl Into<String>) -> Self {
        Self {
            category: None,
            difficulty: Some(difficulty.into()),
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| question.category == c);
        let difficulty_ok = self
            .difficulty
            .as_deref()
            .map_or(true, |d| question.difficulty == d);
        category_ok && difficulty_ok
    }
}

/// One finished quiz run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub player_name: String,
    #[serde(default)]
    pub student_id: String,
    pub score: u32,
    pub total_questions: u32,
    /// Seconds.
    pub time_spent: u64,
    pub timestamp: DateTime<Utc>,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total_questions) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::from_input(
            7,
            QuestionInput::new(
                "What is 2+2?",
                vec!["3".into(), "4".into()],
                1,
                "Math",
                "Basic",
            ),
            Utc::now(),
        )
    }

    #[test]
    fn options_decode_from_list() {
        let json = r#"{"id":1,"question":"q","options":["a","b"],"correctAnswer":0,
            "category":"c","difficulty":"Basic"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.options, vec!["a", "b"]);
    }

    #[test]
    fn options_decode_from_encoded_string() {
        let json = r#"{"id":1,"question":"q","options":"[\"a\",\"b\",\"c\"]","correctAnswer":2,
            "category":"c","difficulty":"Basic"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.options, vec!["a", "b", "c"]);
    }

    #[test]
    fn options_reject_garbage_string() {
        let json = r#"{"id":1,"question":"q","options":"not json","correctAnswer":0,
            "category":"c","difficulty":"Basic"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn missing_timestamps_default_to_epoch() {
        let json = r#"{"id":1,"question":"q","options":["a","b"],"correctAnswer":0,
            "category":"c","difficulty":"Basic"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("correctAnswer").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("correct_answer").is_none());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut q = sample();
        let before = q.clone();
        let later = before.updated_at + chrono::Duration::seconds(5);
        QuestionPatch::default()
            .with_category("Arithmetic")
            .apply(&mut q, later);

        assert_eq!(q.category, "Arithmetic");
        assert_eq!(q.updated_at, later);
        assert_eq!(q.question, before.question);
        assert_eq!(q.options, before.options);
        assert_eq!(q.correct_answer, before.correct_answer);
        assert_eq!(q.difficulty, before.difficulty);
        assert_eq!(q.created_at, before.created_at);
    }

    #[test]
    fn filter_combines_criteria() {
        let q = sample();
        assert!(QuestionFilter::default().matches(&q));
        assert!(QuestionFilter::category("Math").matches(&q));
        assert!(!QuestionFilter::category("math").matches(&q));
        let both = QuestionFilter {
            category: Some("Math".into()),
            difficulty: Some("Advanced".into()),
        };
        assert!(!both.matches(&q));
    }

    #[test]
    fn percentage_handles_zero_total() {
        let result = QuizResult {
            player_name: "neo".into(),
            student_id: "S1".into(),
            score: 0,
            total_questions: 0,
            time_spent: 10,
            timestamp: Utc::now(),
        };
        assert_eq!(result.percentage(), 0.0);
    }

    #[test]
    fn correct_option_out_of_bounds_is_none() {
        let mut q = sample();
        assert_eq!(q.correct_option(), Some("4"));
        q.correct_answer = 9;
        assert_eq!(q.correct_option(), None);
    }
}
