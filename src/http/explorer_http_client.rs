//! High-level client for the OneLedger explorer REST API.
//!
//! [`ExplorerHttpClient`] builds request URLs from validated queries, performs
//! one GET per call and decodes the JSON answer. It also implements
//! [`LedgerQuery`] so an [`AccountHistory`](crate::transactions::ledger::AccountHistory)
//! can page through live explorer data.
//!
//! # Example
//!
//! ```rust,no_run
//! use olt_explorer::http::ExplorerHttpClient;
//! use olt_explorer::transactions::ledger::AccountTxsQuery;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = ExplorerHttpClient::new("https://explorer.kainos.oneledger.network")?;
//! let query = AccountTxsQuery::new("0lt52901e9603f9d504049c9d79132e3e9c2820b6a4")?.with_page(0);
//! let page = client.query_account_txs(&query).await?;
//! println!("{} transactions, {} pages", page.txs.len(), page.total_page);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Method;

use super::error::HttpError;
use super::http_client::HttpClient;
use super::request::{account_info_url, account_txs_url, blocks_url};
use super::types::{AccountInfoResponse, BlocksResponse};
use crate::log::mask_string;
use crate::transactions::ledger::{
    AccountTxsQuery, BlocksQuery, HistoryError, LedgerQuery, QueryError, TxsPage, parse_base_url, validate_address,
};

/// HTTP client for the ledger explorer.
///
/// Requests are not retried. The client is safe to share between tasks.
pub struct ExplorerHttpClient {
    http_client: HttpClient,
}

impl ExplorerHttpClient {
    /// Creates a client with the default five second timeout.
    ///
    /// # Errors
    ///
    /// [`QueryError::IllegalUrl`] if `base_url` is not an absolute `http` or
    /// `https` URL with a host.
    pub fn new(base_url: &str) -> Result<Self, anyhow::Error> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
        })
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            http_client: HttpClient::with_timeout(base_url, timeout)?,
        })
    }

    /// Round trip time of the most recent request, if any was made.
    pub async fn last_latency(&self) -> Option<Duration> {
        self.http_client.get_latency().await
    }

    /// Fetches the account summary for `address`.
    pub async fn query_account_info(&self, address: &str) -> Result<AccountInfoResponse, anyhow::Error> {
        validate_address(address)?;
        let url = account_info_url(self.http_client.base_url(), address)?;
        debug!(address = mask_string(address).as_str(); "Querying account info");

        let info = self.http_client.send_request(Method::GET, url).await?;
        Ok(info)
    }

    /// Fetches one raw page of the account's transactions.
    pub async fn query_account_txs(&self, query: &AccountTxsQuery) -> Result<TxsPage, HttpError> {
        let url = account_txs_url(self.http_client.base_url(), query)?;
        debug!(
            address = mask_string(query.address()).as_str(),
            page:? = query.page(),
            page_size:? = query.page_size();
            "Querying account transactions"
        );

        let page: TxsPage = self.http_client.send_request(Method::GET, url).await?;
        info!(
            txs = page.txs.len(),
            total_page = page.total_page;
            "Received account transactions"
        );
        Ok(page)
    }

    /// Fetches the latest blocks or a single block.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidArgument`] for a paged listing, which belongs to
    /// [`Self::query_blocks_before_height`].
    pub async fn query_blocks(&self, query: &BlocksQuery) -> Result<BlocksResponse, anyhow::Error> {
        if matches!(query, BlocksQuery::Before { .. }) {
            return Err(QueryError::InvalidArgument("use query_blocks_before_height for paged listings".to_string()).into());
        }
        self.fetch_blocks(query).await
    }

    /// Fetches blocks below a height, at most twenty per call.
    pub async fn query_blocks_before_height(&self, query: &BlocksQuery) -> Result<BlocksResponse, anyhow::Error> {
        if !matches!(query, BlocksQuery::Before { .. }) {
            return Err(QueryError::InvalidArgument("expected a beforeHeight or limit listing".to_string()).into());
        }
        self.fetch_blocks(query).await
    }

    async fn fetch_blocks(&self, query: &BlocksQuery) -> Result<BlocksResponse, anyhow::Error> {
        let url = blocks_url(self.http_client.base_url(), query)?;
        debug!(query:% = query; "Querying blocks");
        let blocks = self.http_client.send_request(Method::GET, url).await?;
        Ok(blocks)
    }
}

#[async_trait]
impl LedgerQuery for ExplorerHttpClient {
    async fn fetch_account_txs(&self, query: &AccountTxsQuery) -> Result<TxsPage, HistoryError> {
        Ok(self.query_account_txs(query).await?)
    }
}
