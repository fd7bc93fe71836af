use std::collections::HashMap;

use async_trait::async_trait;

use super::query::AccountTxsQuery;
use super::{HistoryError, LedgerQuery, TxsPage, WireTxsPage};
use crate::amount::{Currency, CurrencyAmount};
use crate::transactions::history_processor::{RawTransaction, RejectedTransaction};

/// A stored record, kept in place even when it could not be decoded.
#[derive(Debug, Clone)]
enum StoredTx {
    Decoded(RawTransaction),
    Undecodable(RejectedTransaction),
}

impl From<Result<RawTransaction, RejectedTransaction>> for StoredTx {
    fn from(record: Result<RawTransaction, RejectedTransaction>) -> Self {
        match record {
            Ok(tx) => Self::Decoded(tx),
            Err(rejected) => Self::Undecodable(rejected),
        }
    }
}

/// Ledger backed by transactions held in memory, keyed by account address.
///
/// Used to replay saved explorer responses and in tests. Pages are cut from
/// the stored list in insertion order; a missing or zero page size returns
/// everything on page 0. Undecodable records of a replayed response keep their
/// position and come back in `rejected`; a currency filter drops them.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    accounts: HashMap<String, Vec<StoredTx>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, address: impl Into<String>, txs: Vec<RawTransaction>) -> Self {
        self.insert(address, txs);
        self
    }

    pub fn insert(&mut self, address: impl Into<String>, txs: Vec<RawTransaction>) {
        self.accounts
            .entry(address.into())
            .or_default()
            .extend(txs.into_iter().map(StoredTx::Decoded));
    }

    /// Loads an explorer account txs response (`{"txs": [...], "totalPage": n}`)
    /// as the full history of `address`.
    pub fn from_response(address: impl Into<String>, json: &str) -> Result<Self, HistoryError> {
        let wire: WireTxsPage = serde_json::from_str(json)?;
        let (records, _) = wire.decode();

        let mut ledger = Self::new();
        ledger
            .accounts
            .entry(address.into())
            .or_default()
            .extend(records.into_iter().map(StoredTx::from));
        Ok(ledger)
    }

    fn matches_currency(stored: &StoredTx, currency: Option<Currency>) -> bool {
        let Some(currency) = currency else {
            return true;
        };
        match stored {
            StoredTx::Decoded(tx) => tx
                .recipients
                .iter()
                .filter_map(|recipient| recipient.amount.as_deref())
                .filter_map(CurrencyAmount::parse_wire)
                .any(|amount| amount.currency == currency),
            StoredTx::Undecodable(_) => false,
        }
    }

    fn into_page<'a>(records: impl Iterator<Item = &'a StoredTx>, total_page: u64) -> TxsPage {
        let mut page = TxsPage {
            total_page,
            ..Default::default()
        };
        for record in records {
            match record {
                StoredTx::Decoded(tx) => page.txs.push(tx.clone()),
                StoredTx::Undecodable(rejected) => page.rejected.push(rejected.clone()),
            }
        }
        page
    }
}

#[async_trait]
impl LedgerQuery for InMemoryLedger {
    async fn fetch_account_txs(&self, query: &AccountTxsQuery) -> Result<TxsPage, HistoryError> {
        let history: Vec<&StoredTx> = self
            .accounts
            .get(query.address())
            .map(|txs| {
                txs.iter()
                    .filter(|stored| Self::matches_currency(stored, query.currency()))
                    .collect()
            })
            .unwrap_or_default();

        let page_size = query.page_size().filter(|size| *size > 0);
        let page = query.page().unwrap_or(0);

        let Some(page_size) = page_size else {
            let total_page = u64::from(!history.is_empty());
            let records = history.into_iter().filter(|_| page == 0);
            return Ok(Self::into_page(records, total_page));
        };

        let total_page = (history.len() as u64).div_ceil(page_size);
        let records = history
            .into_iter()
            .skip(page.saturating_mul(page_size) as usize)
            .take(page_size as usize);

        Ok(Self::into_page(records, total_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::history_processor::{RecipientEntry, TxDetail, TxKind};

    const ADDRESS: &str = "0lt52901e9603f9d504049c9d79132e3e9c2820b6a4";
    const OTHER: &str = "0lt90d3cd0a9cf7f767b990159f66b3e071cb3825c8";

    fn send(hash: &str, amount: &str) -> RawTransaction {
        RawTransaction {
            hash: hash.to_string(),
            kind: TxKind::Send,
            from: ADDRESS.to_string(),
            to: None,
            recipients: vec![RecipientEntry {
                account: OTHER.to_string(),
                amount: Some(amount.to_string()),
            }],
            block_height: 1,
            memo: String::new(),
            fee: None,
            detail: TxDetail::default(),
            chain_id: String::new(),
        }
    }

    fn ledger() -> InMemoryLedger {
        InMemoryLedger::new().with_account(
            ADDRESS,
            vec![
                send("0x01", "1 OLT"),
                send("0x02", "2 ETH"),
                send("0x03", "3 OLT"),
            ],
        )
    }

    fn hashes(page: &TxsPage) -> Vec<&str> {
        page.txs.iter().map(|tx| tx.hash.as_str()).collect()
    }

    #[tokio::test]
    async fn test_pages_are_cut_in_order() {
        let ledger = ledger();
        let query = AccountTxsQuery::new(ADDRESS).unwrap().with_page_size(2);

        let first = ledger.fetch_account_txs(&query.clone().with_page(0)).await.unwrap();
        let second = ledger.fetch_account_txs(&query.clone().with_page(1)).await.unwrap();
        let beyond = ledger.fetch_account_txs(&query.with_page(5)).await.unwrap();

        assert_eq!(hashes(&first), vec!["0x01", "0x02"]);
        assert_eq!(hashes(&second), vec!["0x03"]);
        assert!(beyond.txs.is_empty());
        assert_eq!(first.total_page, 2);
    }

    #[tokio::test]
    async fn test_currency_filter() {
        let query = AccountTxsQuery::new(ADDRESS).unwrap().with_currency(Currency::Eth);
        let page = ledger().fetch_account_txs(&query).await.unwrap();
        assert_eq!(hashes(&page), vec!["0x02"]);
        assert_eq!(page.total_page, 1);
    }

    #[tokio::test]
    async fn test_unknown_account_is_empty() {
        let query = AccountTxsQuery::new(OTHER).unwrap();
        let page = ledger().fetch_account_txs(&query).await.unwrap();
        assert!(page.txs.is_empty());
        assert_eq!(page.total_page, 0);
    }

    #[tokio::test]
    async fn test_from_response() {
        let json = r#"{"txs": [{"hash": "0xaa", "type": "STAKE", "from": null}], "totalPage": 1}"#;
        let ledger = InMemoryLedger::from_response(ADDRESS, json).unwrap();

        let page = ledger
            .fetch_account_txs(&AccountTxsQuery::new(ADDRESS).unwrap())
            .await
            .unwrap();

        assert_eq!(page.txs.len(), 1);
        assert_eq!(page.txs[0].kind, TxKind::Stake);
        assert_eq!(page.txs[0].from, "");
    }

    #[tokio::test]
    async fn test_from_response_keeps_undecodable_records_in_place() {
        let json = r#"{
            "txs": [
                {"hash": "0xaa", "type": "STAKE", "fee": {"amount": "1 OLT", "gas": null}},
                {"hash": "0xbb", "type": "STAKE", "blockHeight": "tall"},
                {"hash": "0xcc", "type": "SEND", "recipients": [{"account": "x", "amount": "1 OLT"}]}
            ],
            "totalPage": 1
        }"#;
        let ledger = InMemoryLedger::from_response(ADDRESS, json).unwrap();
        let query = AccountTxsQuery::new(ADDRESS).unwrap().with_page_size(2);

        let first = ledger.fetch_account_txs(&query.clone().with_page(0)).await.unwrap();
        let second = ledger.fetch_account_txs(&query.clone().with_page(1)).await.unwrap();
        let olt_only = ledger
            .fetch_account_txs(&AccountTxsQuery::new(ADDRESS).unwrap().with_currency(Currency::Olt))
            .await
            .unwrap();

        assert_eq!(hashes(&first), vec!["0xaa"]);
        assert_eq!(first.rejected.len(), 1);
        assert_eq!(first.rejected[0].hash, "0xbb");
        assert_eq!(first.total_page, 2);
        assert_eq!(hashes(&second), vec!["0xcc"]);
        assert!(second.rejected.is_empty());
        assert_eq!(hashes(&olt_only), vec!["0xcc"]);
        assert!(olt_only.rejected.is_empty());
    }

    #[test]
    fn test_from_response_rejects_malformed_json() {
        assert!(matches!(
            InMemoryLedger::from_response(ADDRESS, "{not json"),
            Err(HistoryError::Replay(_))
        ));
    }
}
