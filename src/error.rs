use thiserror::Error;

/// Error types for the prediction cycle
#[derive(Error, Debug)]
pub enum PredictError {
    /// Transport-level failure talking to the prediction service
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but with a non-success HTTP status
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result with PredictError
pub type Result<T> = std::result::Result<T, PredictError>;
