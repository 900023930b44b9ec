use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Insufficient data: {operation} requires at least {required} points, got {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Degenerate arithmetic: {0}")]
    DegenerateArithmetic(String),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
