pub mod amount;
pub mod cli;
pub mod config;
pub mod http;
pub mod log;
pub mod transactions;

pub use crate::amount::{AmountError, Currency, from_fixed_point, to_fixed_point};
pub use crate::http::{ExplorerHttpClient, HttpError};
pub use crate::transactions::history_processor::{ClassifiedTransaction, HistoryProcessor, RawTransaction, TypeCode};
pub use crate::transactions::ledger::{AccountHistory, HistoryError, HistoryPage, LedgerQuery};
