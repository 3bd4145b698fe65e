use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to parse stored data under '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Corrupt id counter under '{key}': {value:?}")]
    CorruptCounter { key: String, value: String },

    #[error("No question ids left after {0}")]
    IdsExhausted(u64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl QuizError {
    /// True for failures caused by unreadable persisted data.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            QuizError::Parse { .. } | QuizError::CorruptCounter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
