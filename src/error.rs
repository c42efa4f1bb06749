use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleRankError {
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension mismatch: row needs {required} weights, only {available} available")]
    DimensionMismatch { required: usize, available: usize },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl PuzzleRankError {
    pub fn length_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleRankError>;
