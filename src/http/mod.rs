//! HTTP client module for the OneLedger explorer REST API.
//!
//! - [`ExplorerHttpClient`] - account, transaction and block queries
//! - [`HttpError`] - transport, status and decoding failures
//! - [`request`] - URL builders shared by the client and its tests
//!
//! Requests use a fixed timeout and are never retried.

mod error;
mod explorer_http_client;
mod http_client;
pub mod request;
mod types;

pub use error::HttpError;
pub use explorer_http_client::ExplorerHttpClient;
pub use http_client::DEFAULT_TIMEOUT_SECS;
pub use types::{AccountInfoResponse, BlocksResponse};
