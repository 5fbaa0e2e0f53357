use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error("Malformed message: {0}")]
    MalformedMessage(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Failed to publish result to {destination}: {source}")]
    PublishError {
        destination: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Batch failed: {} of {total} messages could not be processed", .failed.len())]
    BatchFailed { failed: Vec<String>, total: usize },
}

pub type Result<T> = std::result::Result<T, EvaluatorError>;
