use thiserror::Error;

/// Error type that captures diary failures outside the notification flow.
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
