use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No readable text in source document: {0}")]
    EmptyDocument(String),

    #[error("Trend analysis requires at least 2 periods, got {0}")]
    InsufficientPeriods(usize),

    #[error("Insight provider failed: {0}")]
    ProviderFailed(String),

    #[error("Provider returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP transport error: {0}")]
    TransportError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
