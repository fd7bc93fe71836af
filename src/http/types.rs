use serde::{Deserialize, Serialize};

/// Account summary returned by `/accounts/{address}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfoResponse {
    /// The account address.
    pub key: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Block listings are passed through untouched.
pub type BlocksResponse = serde_json::Value;
