//! Error types for DataForSEO API calls

use thiserror::Error;

/// Errors that can occur when calling the DataForSEO API
#[derive(Error, Debug)]
pub enum BackendError {
    /// Request could not be sent or the body could not be read
    #[error("request to DataForSEO failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP status
    #[error("DataForSEO error {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The API answered with an error status code in the envelope
    #[error("DataForSEO API error {code}: {message}")]
    Api {
        code: i64,
        message: String,
    },

    /// Response body did not match the expected envelope
    #[error("failed to parse DataForSEO response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for backend calls
pub type BackendResult<T> = Result<T, BackendError>;
