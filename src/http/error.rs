//! Error types for explorer HTTP operations.

use thiserror::Error;

/// Errors that can occur while talking to the ledger explorer.
///
/// Requests are made once; a transport failure is returned as-is and the
/// caller decides whether to try again.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be sent or the response could not be read.
    ///
    /// Connection refused, DNS failure, TLS errors and timeouts all land here.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The explorer answered with a non-success status code.
    #[error("Server error {status}: {body}")]
    ServerError {
        status: reqwest::StatusCode,
        /// Response body, kept for diagnostics.
        body: String,
    },

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// The base URL cannot carry a path, e.g. `mailto:` or `data:` URLs.
    #[error("Base URL {0} can not be extended with a path")]
    InvalidBaseUrl(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
