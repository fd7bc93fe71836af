mod error;
mod history;
mod in_memory;
mod query;

use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::transactions::history_processor::{RawTransaction, RejectedTransaction, decode_transaction, null_as_default};

pub use error::HistoryError;
pub use history::{AccountHistory, HistoryPage};
pub use in_memory::InMemoryLedger;
pub use query::{
    AccountTxsParams, AccountTxsQuery, BlocksQuery, MAX_BLOCKS_LIMIT, OLT_ADDRESS_LEN, OLT_ADDRESS_PREFIX,
    QueryError, is_valid_olt_address, parse_base_url, validate_address,
};

/// One page of an account's raw transaction history.
///
/// Records are decoded one at a time; a record of the wrong shape ends up in
/// `rejected` and its siblings still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "WireTxsPage")]
pub struct TxsPage {
    pub txs: Vec<RawTransaction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedTransaction>,
    pub total_page: u64,
}

/// Account txs response as sent by the explorer, records still undecoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTxsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    txs: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    total_page: u64,
}

impl WireTxsPage {
    fn decode(self) -> (Vec<Result<RawTransaction, RejectedTransaction>>, u64) {
        let records = self
            .txs
            .into_iter()
            .map(|value| {
                decode_transaction(value).inspect_err(|rejected| {
                    warn!(
                        hash = rejected.hash.as_str(),
                        reason = rejected.reason.as_str();
                        "Skipping undecodable transaction record"
                    );
                })
            })
            .collect();
        (records, self.total_page)
    }
}

impl From<WireTxsPage> for TxsPage {
    fn from(wire: WireTxsPage) -> Self {
        let (records, total_page) = wire.decode();
        let mut page = TxsPage {
            total_page,
            ..Default::default()
        };
        for record in records {
            match record {
                Ok(tx) => page.txs.push(tx),
                Err(rejected) => page.rejected.push(rejected),
            }
        }
        page
    }
}

/// Source of raw account transactions.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    async fn fetch_account_txs(&self, query: &AccountTxsQuery) -> Result<TxsPage, HistoryError>;
}
