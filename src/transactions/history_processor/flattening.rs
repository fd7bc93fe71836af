use log::debug;

use super::parsing::{display_wire_amount, is_registered_amount};
use super::types::{RawTransaction, RecipientEntry};

/// One display row of a raw transaction before sign and type are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedRow<'a> {
    pub transaction: &'a RawTransaction,
    /// Counterparty account of this row.
    pub to: String,
    /// Unsigned value with currency suffix.
    pub original_value: String,
}

/// Expands raw transactions into one row per counterparty.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecipientFlattener;

impl RecipientFlattener {
    pub fn new() -> Self {
        Self
    }

    /// Fan-out kinds produce one row per recipient, in recipient order, and
    /// none at all when the list is empty. Every other kind produces exactly
    /// one row built from its detail fields.
    pub fn flatten<'a>(&self, transaction: &'a RawTransaction) -> Vec<FlattenedRow<'a>> {
        if transaction.kind.is_fan_out() {
            return transaction
                .recipients
                .iter()
                .map(|recipient| self.recipient_row(transaction, recipient))
                .collect();
        }

        vec![self.detail_row(transaction)]
    }

    fn recipient_row<'a>(&self, transaction: &'a RawTransaction, recipient: &RecipientEntry) -> FlattenedRow<'a> {
        if let Some(amount) = recipient.amount.as_deref().filter(|amount| !is_registered_amount(amount)) {
            debug!(
                hash = transaction.hash.as_str(),
                amount = amount;
                "Recipient amount is not a registered currency, shown as zero"
            );
        }
        FlattenedRow {
            transaction,
            to: recipient.account.clone(),
            original_value: display_wire_amount(recipient.amount.as_deref()),
        }
    }

    fn detail_row<'a>(&self, transaction: &'a RawTransaction) -> FlattenedRow<'a> {
        let first_recipient = transaction.recipients.first();
        let detail = &transaction.detail;

        let to = first_recipient
            .map(|r| r.account.clone())
            .or_else(|| detail.beneficiary.clone())
            .or_else(|| detail.owner.clone())
            .or_else(|| detail.seller.clone())
            .or_else(|| transaction.to.clone())
            .unwrap_or_default();

        let original_value = match first_recipient {
            Some(recipient) => display_wire_amount(recipient.amount.as_deref()),
            None => [&detail.price, &detail.offering, &detail.amount]
                .into_iter()
                .flatten()
                .find_map(|amount| amount.to_currency_amount())
                .map(|amount| amount.to_display())
                .unwrap_or_default(),
        };

        FlattenedRow {
            transaction,
            to,
            original_value,
        }
    }
}
