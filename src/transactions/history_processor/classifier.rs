use super::types::{TransactionDirection, TxKind, TypeCode};
use crate::amount::CurrencyClass;

/// Auxiliary inputs that refine a transaction's type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationFlags {
    /// Currency of the row's unsigned value.
    pub currency: CurrencyClass,
    /// `cancelSale` of a domain sale; `None` when the explorer omitted it.
    pub cancel_sale: Option<bool>,
}

impl ClassificationFlags {
    pub fn new(currency: CurrencyClass, cancel_sale: Option<bool>) -> Self {
        Self { currency, cancel_sale }
    }

    /// Flags derived from a display value such as `"1 OLT"`.
    pub fn from_value(original_value: &str, cancel_sale: Option<bool>) -> Self {
        Self::new(CurrencyClass::of_display_value(original_value), cancel_sale)
    }
}

/// Maps a transaction row to its canonical type code for the queried account.
///
/// Never fails: any combination without a mapping is [`TypeCode::Unknown`].
/// A domain purchase whose buyer and seller are the same account is always a
/// self purchase. Otherwise the sender and recipient sides are evaluated
/// separately and the recipient mapping wins when both sides match.
pub fn classify(kind: TxKind, from: &str, to: &str, queried: &str, flags: ClassificationFlags) -> TypeCode {
    if kind == TxKind::DomainPurchase && from == to {
        return TypeCode::DomainPurchaseSelf;
    }

    let outgoing = (from == queried)
        .then(|| side_code(kind, TransactionDirection::Outgoing, flags))
        .flatten();
    let incoming = (to == queried)
        .then(|| side_code(kind, TransactionDirection::Incoming, flags))
        .flatten();

    incoming
        .or(outgoing)
        .or_else(|| direct_code(kind))
        .unwrap_or(TypeCode::Unknown)
}

fn side_code(kind: TxKind, direction: TransactionDirection, flags: ClassificationFlags) -> Option<TypeCode> {
    use CurrencyClass::{Ether, Settlement};
    use TransactionDirection::{Incoming, Outgoing};

    match (kind, direction, flags.currency, flags.cancel_sale) {
        (TxKind::Send, Outgoing, Settlement, _) => Some(TypeCode::SendSenderOlt),
        (TxKind::Send, Outgoing, Ether, _) => Some(TypeCode::SendSenderOeth),
        (TxKind::Send, Incoming, Settlement, _) => Some(TypeCode::SendRecipientOlt),
        (TxKind::Send, Incoming, Ether, _) => Some(TypeCode::SendRecipientOeth),
        (TxKind::DomainSend, Outgoing, Settlement, _) => Some(TypeCode::DomainSendSenderOlt),
        (TxKind::DomainSend, Outgoing, Ether, _) => Some(TypeCode::DomainSendSenderOeth),
        (TxKind::DomainSend, Incoming, Settlement, _) => Some(TypeCode::DomainSendRecipientOlt),
        (TxKind::DomainSend, Incoming, Ether, _) => Some(TypeCode::DomainSendRecipientOeth),
        (TxKind::DomainSell, Outgoing, _, Some(false)) => Some(TypeCode::DomainOnSale),
        (TxKind::DomainSell, Outgoing, _, Some(true)) => Some(TypeCode::DomainOffSale),
        (TxKind::DomainPurchase, Outgoing, _, _) => Some(TypeCode::DomainPurchaseBuyer),
        (TxKind::DomainPurchase, Incoming, _, _) => Some(TypeCode::DomainPurchaseSeller),
        // A sale listing has no recipient side.
        (TxKind::Send | TxKind::DomainSend | TxKind::DomainSell, _, _, _) => None,
        (other, _, _, _) => direct_code(other),
    }
}

/// Direction-independent codes.
fn direct_code(kind: TxKind) -> Option<TypeCode> {
    let code = match kind {
        TxKind::DomainCreate => TypeCode::DomainCreate,
        TxKind::DomainUpdate => TypeCode::DomainUpdate,
        TxKind::DomainDeleteSub => TypeCode::DomainDeleteSub,
        TxKind::DomainRenew => TypeCode::DomainRenew,
        TxKind::Stake => TypeCode::Stake,
        TxKind::Unstake => TypeCode::Unstake,
        TxKind::Withdraw => TypeCode::Withdraw,
        TxKind::BtcLock => TypeCode::BtcLock,
        TxKind::BtcAddSignature => TypeCode::BtcAddSignature,
        TxKind::BtcBroadcastSuccess => TypeCode::BtcBroadcastSuccess,
        TxKind::BtcReportFinalityMint => TypeCode::BtcReportFinalityMint,
        TxKind::BtcExtMint => TypeCode::BtcExtMint,
        TxKind::BtcRedeem => TypeCode::BtcRedeem,
        TxKind::BtcFailedBroadcastReset => TypeCode::BtcFailedBroadcastReset,
        TxKind::EthLock => TypeCode::EthLock,
        TxKind::EthReportFinalityMint => TypeCode::EthReportFinalityMint,
        TxKind::EthRedeem => TypeCode::EthRedeem,
        TxKind::Erc20Lock => TypeCode::Erc20Lock,
        TxKind::Erc20Redeem => TypeCode::Erc20Redeem,
        TxKind::ProposalCreate => TypeCode::ProposalCreate,
        TxKind::ProposalCancel => TypeCode::ProposalCancel,
        TxKind::ProposalFund => TypeCode::ProposalFund,
        TxKind::ProposalVote => TypeCode::ProposalVote,
        TxKind::ProposalFinalize => TypeCode::ProposalFinalize,
        TxKind::ExpireVotes => TypeCode::ExpireVotes,
        TxKind::ProposalWithdrawFunds => TypeCode::ProposalWithdrawFunds,
        TxKind::RewardsWithdraw => TypeCode::RewardsWithdraw,
        TxKind::Send | TxKind::DomainSend | TxKind::DomainSell | TxKind::DomainPurchase | TxKind::Unknown => {
            return None;
        },
    };
    Some(code)
}
