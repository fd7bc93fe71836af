use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::network::Network;
use crate::cli::{ApplyArgs, ChainArgs, ConnectionArgs};
use crate::http::DEFAULT_TIMEOUT_SECS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub network: Network,
    /// Overrides the network preset when set and non-empty.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub page_size: Option<u64>,
    pub chain_id: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: Some(20),
            chain_id: None,
        }
    }
}

impl ExplorerConfig {
    pub const KEY: &'static str = "explorer";

    pub fn explorer_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.network.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ApplyArgs for ExplorerConfig {
    fn apply_connection(&mut self, args: &ConnectionArgs) {
        if let Some(network) = args.network {
            self.network = network;
            // A preset chosen on the command line beats a URL from the file.
            if args.base_url.is_none() {
                self.base_url = None;
            }
        }
        if let Some(base_url) = &args.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }

    fn apply_chain(&mut self, args: &ChainArgs) {
        if let Some(chain_id) = &args.chain_id {
            self.chain_id = Some(chain_id.clone());
        }
    }
}
