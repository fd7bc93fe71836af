mod builder;
mod classifier;
mod error;
mod fee;
mod flattening;
mod formatting;
mod parsing;
mod processor;
mod types;

pub use builder::ClassifiedTransactionBuilder;
pub use classifier::{ClassificationFlags, classify};
pub use error::ProcessorError;
pub use fee::{FeeError, FeeSummary, Price, compute_fee, summarize_fee};
pub use flattening::{FlattenedRow, RecipientFlattener};
pub use formatting::{format_js_number, resolve_sign, wrap_negative};
pub(crate) use parsing::null_as_default;
pub use parsing::{decode_name, decode_transaction, display_wire_amount, is_registered_amount, try_decode_name};
pub use processor::HistoryProcessor;
pub use types::{
    ClassifiedTransaction, DetailAmount, ProcessedHistory, RawFee, RawTransaction, RecipientEntry,
    RejectedTransaction, TransactionDirection, TxDetail, TxKind, TypeCode,
};
