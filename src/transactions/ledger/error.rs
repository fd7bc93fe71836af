use thiserror::Error;

use super::query::QueryError;
use crate::http::HttpError;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Explorer request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Failed to read saved explorer response: {0}")]
    Replay(#[from] serde_json::Error),
}
