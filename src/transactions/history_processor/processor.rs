use log::{debug, warn};

use super::builder::ClassifiedTransactionBuilder;
use super::classifier::{ClassificationFlags, classify};
use super::error::ProcessorError;
use super::fee::{FeeSummary, summarize_fee};
use super::flattening::{FlattenedRow, RecipientFlattener};
use super::formatting::resolve_sign;
use super::parsing::try_decode_name;
use super::types::{ClassifiedTransaction, ProcessedHistory, RawTransaction, RejectedTransaction};
use crate::log::mask_string;

/// Turns raw explorer transactions into rows classified for one account.
///
/// Each raw transaction goes through fee aggregation, recipient flattening,
/// sign resolution and classification. Output order follows input order, and
/// recipient order within a transaction.
pub struct HistoryProcessor {
    queried_address: String,
    flattener: RecipientFlattener,
}

impl HistoryProcessor {
    pub fn new(queried_address: impl Into<String>) -> Self {
        Self {
            queried_address: queried_address.into(),
            flattener: RecipientFlattener::new(),
        }
    }

    pub fn queried_address(&self) -> &str {
        &self.queried_address
    }

    /// Processes a batch. A transaction that fails validation is reported in
    /// `rejected` and does not affect its siblings.
    pub fn process(&self, transactions: &[RawTransaction]) -> ProcessedHistory {
        let mut history = ProcessedHistory::default();

        for transaction in transactions {
            match self.process_transaction(transaction) {
                Ok(mut rows) => history.transactions.append(&mut rows),
                Err(e) => {
                    warn!(
                        hash = transaction.hash.as_str(),
                        error:% = e;
                        "Rejected transaction while building history"
                    );
                    history.rejected.push(RejectedTransaction {
                        hash: transaction.hash.clone(),
                        kind: transaction.kind,
                        reason: e.to_string(),
                    });
                },
            }
        }

        debug!(
            address = mask_string(&self.queried_address).as_str(),
            raw = transactions.len(),
            rows = history.transactions.len(),
            rejected = history.rejected.len();
            "Processed transaction history"
        );

        history
    }

    pub fn process_transaction(&self, transaction: &RawTransaction) -> Result<Vec<ClassifiedTransaction>, ProcessorError> {
        let fee = summarize_fee(transaction.fee.as_ref()).map_err(|source| ProcessorError::Fee {
            hash: transaction.hash.clone(),
            source,
        })?;
        let domain_name = Self::domain_name(transaction);

        self.flattener
            .flatten(transaction)
            .into_iter()
            .map(|row| self.classify_row(row, &fee, domain_name.clone()))
            .collect()
    }

    fn classify_row(
        &self,
        row: FlattenedRow<'_>,
        fee: &FeeSummary,
        domain_name: Option<String>,
    ) -> Result<ClassifiedTransaction, ProcessorError> {
        let transaction = row.transaction;
        let is_sender = transaction.from == self.queried_address;

        let display_value = resolve_sign(transaction.kind, is_sender, &row.original_value);
        let flags = ClassificationFlags::from_value(&row.original_value, transaction.detail.cancel_sale);
        let type_code = classify(
            transaction.kind,
            &transaction.from,
            &row.to,
            &self.queried_address,
            flags,
        );

        ClassifiedTransactionBuilder::new()
            .hash(transaction.hash.as_str())
            .kind(transaction.kind)
            .type_code(type_code)
            .parties(transaction.from.as_str(), row.to)
            .values(row.original_value, display_value)
            .block_height(transaction.block_height)
            .memo(transaction.memo.as_str())
            .detail(transaction.detail.clone())
            .chain_id(transaction.chain_id.as_str())
            .fee(fee.clone())
            .domain_name(domain_name)
            .build()
    }

    /// ONS names arrive hex encoded; names that are not hex are shown as given.
    fn domain_name(transaction: &RawTransaction) -> Option<String> {
        if !transaction.kind.is_ons() {
            return None;
        }
        let name = transaction.detail.name.as_deref()?;
        Some(try_decode_name(name).unwrap_or_else(|| name.to_string()))
    }
}
