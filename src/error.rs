//! Error types for the analysis cycle
//!
//! `AnalysisError` is what the user sees. `ServiceError` carries the detail of
//! a failed round trip and only ever reaches the log.

use thiserror::Error;

/// User-facing outcome of a failed analysis attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Input was empty or whitespace only; no request was sent
    #[error("Please enter some text to analyze")]
    EmptyInput,

    /// The backend could not be reached or answered with something unusable
    #[error("Failed to connect to the API. Make sure the backend is running on {backend}")]
    Transport { backend: String },
}

impl AnalysisError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::EmptyInput)
    }
}

/// Detailed cause of a transport failure
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
