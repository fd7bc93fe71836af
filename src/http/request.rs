//! URL builders for the explorer REST API.
//!
//! Every builder returns a fresh [`Url`]; the base URL is never mutated.

use url::Url;

use super::error::HttpError;
use crate::transactions::ledger::{AccountTxsQuery, BlocksQuery};

pub const CHAIN_ID_PARAM: &str = "chainID";

fn with_path(base: &Url, segments: &[&str]) -> Result<Url, HttpError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| HttpError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `{base}/accounts/{address}`
pub fn account_info_url(base: &Url, address: &str) -> Result<Url, HttpError> {
    with_path(base, &["accounts", address])
}

/// `{base}/accounts/{address}/txs?page=&pagesize=&currency=`
pub fn account_txs_url(base: &Url, query: &AccountTxsQuery) -> Result<Url, HttpError> {
    let mut url = with_path(base, &["accounts", query.address(), "txs"])?;
    let pairs = query.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url)
}

/// Block endpoints, with the query's chain id attached.
pub fn blocks_url(base: &Url, query: &BlocksQuery) -> Result<Url, HttpError> {
    let url = match query {
        BlocksQuery::Latest { .. } => with_path(base, &["blocks"])?,
        BlocksQuery::AtHeight { height, .. } => with_path(base, &["blocks", &height.to_string()])?,
        BlocksQuery::Before {
            before_height, limit, ..
        } => {
            let mut url = with_path(base, &["blocks"])?;
            {
                let mut pairs = url.query_pairs_mut();
                if let Some(before_height) = before_height {
                    pairs.append_pair("beforeHeight", &before_height.to_string());
                }
                if let Some(limit) = limit {
                    pairs.append_pair("limit", &limit.to_string());
                }
            }
            url
        },
    };
    Ok(with_chain_id(url, query.chain_id()))
}

/// Appends `chainID=<id>` unless the id is empty or the URL already has one.
pub fn with_chain_id(mut url: Url, chain_id: Option<&str>) -> Url {
    let Some(chain_id) = chain_id.filter(|id| !id.is_empty()) else {
        return url;
    };
    let present = url.query_pairs().any(|(key, value)| key == CHAIN_ID_PARAM && !value.is_empty());
    if !present {
        url.query_pairs_mut().append_pair(CHAIN_ID_PARAM, chain_id);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Currency;

    const ADDRESS: &str = "0lt52901e9603f9d504049c9d79132e3e9c2820b6a4";

    fn base() -> Url {
        Url::parse("http://127.0.0.1:8080").unwrap()
    }

    #[test]
    fn test_account_info_url() {
        let url = account_info_url(&base(), ADDRESS).unwrap();
        assert_eq!(url.as_str(), format!("http://127.0.0.1:8080/accounts/{}", ADDRESS));
    }

    #[test]
    fn test_account_info_url_keeps_base_path() {
        let base = Url::parse("https://proxy.example.com/explorer/").unwrap();
        let url = account_info_url(&base, ADDRESS).unwrap();
        assert_eq!(url.path(), format!("/explorer/accounts/{}", ADDRESS));
    }

    #[test]
    fn test_account_txs_url() {
        let query = AccountTxsQuery::new(ADDRESS)
            .unwrap()
            .with_page(0)
            .with_page_size(1)
            .with_currency(Currency::Olt);

        let url = account_txs_url(&base(), &query).unwrap();

        assert_eq!(
            url.as_str(),
            format!("http://127.0.0.1:8080/accounts/{}/txs?page=0&pagesize=1&currency=olt", ADDRESS)
        );
    }

    #[test]
    fn test_account_txs_url_without_params() {
        let query = AccountTxsQuery::new(ADDRESS).unwrap();
        let url = account_txs_url(&base(), &query).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_blocks_urls() {
        let latest = blocks_url(&base(), &BlocksQuery::at(None, None).unwrap()).unwrap();
        assert_eq!(latest.as_str(), "http://127.0.0.1:8080/blocks");

        let at = blocks_url(&base(), &BlocksQuery::at(Some("0"), Some("OneLedger-6822")).unwrap()).unwrap();
        assert_eq!(at.as_str(), "http://127.0.0.1:8080/blocks/0?chainID=OneLedger-6822");

        let before = blocks_url(&base(), &BlocksQuery::before(Some("100"), Some("20"), None).unwrap()).unwrap();
        assert_eq!(before.as_str(), "http://127.0.0.1:8080/blocks?beforeHeight=100&limit=20");

        let limit_only = blocks_url(&base(), &BlocksQuery::before(None, Some("5"), Some("c")).unwrap()).unwrap();
        assert_eq!(limit_only.as_str(), "http://127.0.0.1:8080/blocks?limit=5&chainID=c");
    }

    #[test]
    fn test_with_chain_id_does_not_duplicate() {
        let url = Url::parse("http://127.0.0.1:8080/blocks?chainID=first").unwrap();
        let url = with_chain_id(url, Some("second"));
        assert_eq!(url.query(), Some("chainID=first"));

        let untouched = with_chain_id(base(), Some(""));
        assert_eq!(untouched.query(), None);
    }
}
