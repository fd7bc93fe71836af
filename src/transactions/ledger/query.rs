use std::fmt::{self, Display};

use thiserror::Error;
use url::Url;

use crate::amount::Currency;

pub const OLT_ADDRESS_PREFIX: &str = "0lt";
pub const OLT_ADDRESS_LEN: usize = 43;
/// Upper bound the explorer accepts for `limit` on block listings.
pub const MAX_BLOCKS_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid account address {0:?}")]
    InvalidAddress(String),

    #[error("Invalid page number {0:?}, expected a non-negative integer")]
    InvalidPageNumber(String),

    #[error("Invalid page size {0:?}, expected a non-negative integer")]
    InvalidPageSize(String),

    #[error("Currency {0:?} is not registered")]
    CurrencyNotRegistered(String),

    #[error("Illegal explorer URL {0:?}")]
    IllegalUrl(String),

    #[error("Invalid block height {0:?}")]
    InvalidBlockHeight(String),

    #[error("Invalid result limit {0:?}, expected an integer between 1 and {MAX_BLOCKS_LIMIT}")]
    InvalidResultLimit(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// `true` for a non-empty `0lt` address of the expected length.
pub fn is_valid_olt_address(address: &str) -> bool {
    !address.is_empty()
        && address != "<nil>"
        && address.starts_with(OLT_ADDRESS_PREFIX)
        && address.len() == OLT_ADDRESS_LEN
}

pub fn validate_address(address: &str) -> Result<(), QueryError> {
    if is_valid_olt_address(address) {
        Ok(())
    } else {
        Err(QueryError::InvalidAddress(address.to_string()))
    }
}

/// Parses an explorer base URL. Only absolute `http`/`https` URLs with a host
/// are accepted.
pub fn parse_base_url(raw: &str) -> Result<Url, QueryError> {
    let url = Url::parse(raw.trim()).map_err(|_| QueryError::IllegalUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return Err(QueryError::IllegalUrl(raw.to_string()));
    }
    Ok(url)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_non_negative(value: &str) -> Option<u64> {
    value.parse::<u64>().ok()
}

/// Unvalidated account history parameters, as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountTxsParams {
    pub address: String,
    pub currency: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl AccountTxsParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<AccountTxsQuery, QueryError> {
        validate_address(&self.address)?;

        let page = non_empty(self.page.as_deref())
            .map(|raw| parse_non_negative(raw).ok_or_else(|| QueryError::InvalidPageNumber(raw.to_string())))
            .transpose()?;
        let page_size = non_empty(self.page_size.as_deref())
            .map(|raw| parse_non_negative(raw).ok_or_else(|| QueryError::InvalidPageSize(raw.to_string())))
            .transpose()?;
        let currency = non_empty(self.currency.as_deref())
            .map(|raw| Currency::from_symbol(raw).ok_or_else(|| QueryError::CurrencyNotRegistered(raw.to_string())))
            .transpose()?;

        Ok(AccountTxsQuery {
            address: self.address.clone(),
            currency,
            page,
            page_size,
        })
    }
}

/// A validated account history query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTxsQuery {
    address: String,
    currency: Option<Currency>,
    page: Option<u64>,
    page_size: Option<u64>,
}

impl AccountTxsQuery {
    pub fn new(address: impl Into<String>) -> Result<Self, QueryError> {
        let address = address.into();
        validate_address(&address)?;
        Ok(Self {
            address,
            currency: None,
            page: None,
            page_size: None,
        })
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    pub fn page(&self) -> Option<u64> {
        self.page
    }

    pub fn page_size(&self) -> Option<u64> {
        self.page_size
    }

    /// Query string pairs in the order the explorer documents them. The
    /// currency is sent lower-cased.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pagesize", page_size.to_string()));
        }
        if let Some(currency) = self.currency {
            pairs.push(("currency", currency.symbol().to_lowercase()));
        }
        pairs
    }
}

/// Which blocks to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlocksQuery {
    /// The latest blocks, as many as the explorer returns by default.
    Latest { chain_id: Option<String> },
    /// One block. Height 0 selects the most recent block.
    AtHeight { height: u64, chain_id: Option<String> },
    /// Blocks strictly below `before_height`, at most `limit` of them.
    Before {
        before_height: Option<u64>,
        limit: Option<u32>,
        chain_id: Option<String>,
    },
}

impl BlocksQuery {
    /// Validates a single-block or latest-blocks request.
    pub fn at(height: Option<&str>, chain_id: Option<&str>) -> Result<Self, QueryError> {
        let chain_id = non_empty(chain_id).map(str::to_string);
        match non_empty(height) {
            None => Ok(Self::Latest { chain_id }),
            Some(raw) => {
                let height = parse_non_negative(raw).ok_or_else(|| QueryError::InvalidBlockHeight(raw.to_string()))?;
                Ok(Self::AtHeight { height, chain_id })
            },
        }
    }

    /// Validates a paged listing. At least one of `before_height` and `limit`
    /// must be given.
    pub fn before(before_height: Option<&str>, limit: Option<&str>, chain_id: Option<&str>) -> Result<Self, QueryError> {
        let before_height = non_empty(before_height);
        let limit = non_empty(limit);
        if before_height.is_none() && limit.is_none() {
            return Err(QueryError::InvalidArgument(
                "beforeHeight and limit can not both be empty".to_string(),
            ));
        }

        let before_height = before_height
            .map(|raw| parse_non_negative(raw).ok_or_else(|| QueryError::InvalidBlockHeight(raw.to_string())))
            .transpose()?;
        let limit = limit
            .map(|raw| {
                raw.parse::<u32>()
                    .ok()
                    .filter(|limit| (1..=MAX_BLOCKS_LIMIT).contains(limit))
                    .ok_or_else(|| QueryError::InvalidResultLimit(raw.to_string()))
            })
            .transpose()?;

        Ok(Self::Before {
            before_height,
            limit,
            chain_id: non_empty(chain_id).map(str::to_string),
        })
    }

    pub fn chain_id(&self) -> Option<&str> {
        match self {
            Self::Latest { chain_id } | Self::AtHeight { chain_id, .. } | Self::Before { chain_id, .. } => {
                chain_id.as_deref()
            },
        }
    }
}

impl Display for BlocksQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest { .. } => write!(f, "latest blocks"),
            Self::AtHeight { height, .. } => write!(f, "block {}", height),
            Self::Before {
                before_height, limit, ..
            } => write!(f, "blocks before {:?} (limit {:?})", before_height, limit),
        }
    }
}
