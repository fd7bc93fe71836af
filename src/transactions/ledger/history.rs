use log::info;
use serde::{Deserialize, Serialize};

use super::query::{AccountTxsParams, AccountTxsQuery};
use super::{HistoryError, LedgerQuery};
use crate::log::mask_string;
use crate::transactions::history_processor::{ClassifiedTransaction, HistoryProcessor, RejectedTransaction};

/// Classified history of one account, one page at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    pub txs: Vec<ClassifiedTransaction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedTransaction>,
    pub total_page: u64,
}

/// Runs the history pipeline over pages fetched from a [`LedgerQuery`].
pub struct AccountHistory<S> {
    source: S,
}

impl<S: LedgerQuery> AccountHistory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validates user supplied parameters, then fetches and classifies the page.
    pub async fn query(&self, params: &AccountTxsParams) -> Result<HistoryPage, HistoryError> {
        let query = params.validate()?;
        self.fetch(&query).await
    }

    pub async fn fetch(&self, query: &AccountTxsQuery) -> Result<HistoryPage, HistoryError> {
        let page = self.source.fetch_account_txs(query).await?;
        let processed = HistoryProcessor::new(query.address()).process(&page.txs);
        let mut rejected = page.rejected;
        rejected.extend(processed.rejected);

        info!(
            address = mask_string(query.address()).as_str(),
            page:? = query.page(),
            rows = processed.transactions.len(),
            rejected = rejected.len(),
            total_page = page.total_page;
            "Loaded account history"
        );

        Ok(HistoryPage {
            txs: processed.transactions,
            rejected,
            total_page: page.total_page,
        })
    }
}
