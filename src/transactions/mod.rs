//! Account transaction history.
//!
//! ```text
//! +-------------------+     +------------------+     +-------------------+
//! | ExplorerHttpClient|---->| AccountHistory   |---->| HistoryProcessor  |
//! | InMemoryLedger    |     | (LedgerQuery)    |     | fee / flatten /   |
//! +-------------------+     +------------------+     | sign / classify   |
//!                                                    +-------------------+
//! ```
//!
//! - [`ledger`]: query validation, the [`ledger::LedgerQuery`] seam and the
//!   paging service on top of it
//! - [`history_processor`]: turns raw explorer records into rows classified
//!   for one queried account

pub mod history_processor;
pub mod ledger;

pub use history_processor::{ClassifiedTransaction, HistoryProcessor, ProcessedHistory, ProcessorError, TypeCode};
pub use ledger::{AccountHistory, HistoryError, HistoryPage, LedgerQuery};
