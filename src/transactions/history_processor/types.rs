use std::fmt::{self, Display};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::parsing::null_as_default;

/// Semantic kind of a ledger transaction, as reported by the explorer's `type` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxKind {
    Send,
    DomainSend,
    DomainCreate,
    DomainUpdate,
    DomainSell,
    DomainPurchase,
    DomainDeleteSub,
    DomainRenew,
    Stake,
    Unstake,
    Withdraw,
    BtcLock,
    BtcAddSignature,
    BtcBroadcastSuccess,
    BtcReportFinalityMint,
    BtcExtMint,
    BtcRedeem,
    BtcFailedBroadcastReset,
    EthLock,
    EthReportFinalityMint,
    EthRedeem,
    Erc20Lock,
    Erc20Redeem,
    ProposalCreate,
    ProposalCancel,
    ProposalFund,
    ProposalVote,
    ProposalFinalize,
    ExpireVotes,
    ProposalWithdrawFunds,
    RewardsWithdraw,
    #[serde(other)]
    Unknown,
}

impl TxKind {
    /// Kinds whose value is spread over a `recipients` list, one row per entry.
    pub fn is_fan_out(&self) -> bool {
        matches!(self, Self::Send | Self::DomainSend)
    }

    /// Domain-service (ONS) kinds that target a name rather than an address.
    pub fn is_ons(&self) -> bool {
        matches!(
            self,
            Self::DomainCreate
                | Self::DomainUpdate
                | Self::DomainSell
                | Self::DomainPurchase
                | Self::DomainDeleteSub
                | Self::DomainRenew
        )
    }
}

/// Side of a transaction the queried account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionDirection {
    Incoming,
    Outgoing,
}

/// Canonical transaction type code shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    SendRecipientOlt,
    SendSenderOlt,
    SendRecipientOeth,
    SendSenderOeth,
    DomainSendRecipientOlt,
    DomainSendSenderOlt,
    DomainSendRecipientOeth,
    DomainSendSenderOeth,
    DomainCreate,
    DomainUpdate,
    DomainOnSale,
    DomainOffSale,
    DomainPurchaseBuyer,
    DomainPurchaseSeller,
    DomainPurchaseSelf,
    DomainDeleteSub,
    DomainRenew,
    Stake,
    Unstake,
    Withdraw,
    BtcLock,
    BtcAddSignature,
    BtcBroadcastSuccess,
    BtcReportFinalityMint,
    BtcExtMint,
    BtcRedeem,
    BtcFailedBroadcastReset,
    EthLock,
    EthReportFinalityMint,
    EthRedeem,
    Erc20Lock,
    Erc20Redeem,
    ProposalCreate,
    ProposalCancel,
    ProposalFund,
    ProposalVote,
    ProposalFinalize,
    ExpireVotes,
    ProposalWithdrawFunds,
    RewardsWithdraw,
    Unknown,
}

impl TypeCode {
    pub const ALL: [TypeCode; 41] = [
        Self::SendRecipientOlt,
        Self::SendSenderOlt,
        Self::SendRecipientOeth,
        Self::SendSenderOeth,
        Self::DomainSendRecipientOlt,
        Self::DomainSendSenderOlt,
        Self::DomainSendRecipientOeth,
        Self::DomainSendSenderOeth,
        Self::DomainCreate,
        Self::DomainUpdate,
        Self::DomainOnSale,
        Self::DomainOffSale,
        Self::DomainPurchaseBuyer,
        Self::DomainPurchaseSeller,
        Self::DomainPurchaseSelf,
        Self::DomainDeleteSub,
        Self::DomainRenew,
        Self::Stake,
        Self::Unstake,
        Self::Withdraw,
        Self::BtcLock,
        Self::BtcAddSignature,
        Self::BtcBroadcastSuccess,
        Self::BtcReportFinalityMint,
        Self::BtcExtMint,
        Self::BtcRedeem,
        Self::BtcFailedBroadcastReset,
        Self::EthLock,
        Self::EthReportFinalityMint,
        Self::EthRedeem,
        Self::Erc20Lock,
        Self::Erc20Redeem,
        Self::ProposalCreate,
        Self::ProposalCancel,
        Self::ProposalFund,
        Self::ProposalVote,
        Self::ProposalFinalize,
        Self::ExpireVotes,
        Self::ProposalWithdrawFunds,
        Self::RewardsWithdraw,
        Self::Unknown,
    ];

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::SendRecipientOlt => "tx_4000",
            Self::SendSenderOlt => "tx_4001",
            Self::SendRecipientOeth => "tx_4002",
            Self::SendSenderOeth => "tx_4003",
            Self::DomainSendRecipientOlt => "tx_4010",
            Self::DomainSendSenderOlt => "tx_4011",
            Self::DomainSendRecipientOeth => "tx_4012",
            Self::DomainSendSenderOeth => "tx_4013",
            Self::DomainCreate => "tx_4020",
            Self::DomainUpdate => "tx_4021",
            Self::DomainOnSale => "tx_4022",
            Self::DomainOffSale => "tx_4023",
            Self::DomainPurchaseBuyer => "tx_4024",
            Self::DomainPurchaseSeller => "tx_4025",
            Self::DomainPurchaseSelf => "tx_4026",
            Self::DomainDeleteSub => "tx_4027",
            Self::DomainRenew => "tx_4028",
            Self::Stake => "tx_4030",
            Self::Unstake => "tx_4031",
            Self::Withdraw => "tx_4040",
            Self::BtcLock => "tx_4050",
            Self::BtcAddSignature => "tx_4051",
            Self::BtcBroadcastSuccess => "tx_4052",
            Self::BtcReportFinalityMint => "tx_4053",
            Self::BtcExtMint => "tx_4054",
            Self::BtcRedeem => "tx_4055",
            Self::BtcFailedBroadcastReset => "tx_4056",
            Self::EthLock => "tx_4060",
            Self::EthReportFinalityMint => "tx_4061",
            Self::EthRedeem => "tx_4062",
            Self::Erc20Lock => "tx_4063",
            Self::Erc20Redeem => "tx_4064",
            Self::ProposalCreate => "tx_4070",
            Self::ProposalCancel => "tx_4071",
            Self::ProposalFund => "tx_4072",
            Self::ProposalVote => "tx_4073",
            Self::ProposalFinalize => "tx_4074",
            Self::ExpireVotes => "tx_4075",
            Self::ProposalWithdrawFunds => "tx_4076",
            Self::RewardsWithdraw => "tx_4080",
            Self::Unknown => "tx_0000",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|type_code| type_code.as_code() == code)
    }
}

impl Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).ok_or_else(|| de::Error::custom(format!("unknown type code {}", code)))
    }
}

/// A transaction record exactly as returned by the ledger explorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub hash: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<RecipientEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub block_height: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub memo: String,
    #[serde(default)]
    pub fee: Option<RawFee>,
    #[serde(rename = "txDetail", default, deserialize_with = "null_as_default")]
    pub detail: TxDetail,
    #[serde(rename = "chainID", default, deserialize_with = "null_as_default")]
    pub chain_id: String,
}

/// One beneficiary of a fan-out transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipientEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub account: String,
    /// Wire amount, `"<integer> <SYMBOL>"` in the smallest unit.
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawFee {
    /// Gas price as a wire amount.
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gas: u64,
}

/// Kind-specific transaction fields.
///
/// Fields the pipeline does not interpret are kept in `extra` so they survive
/// into the classified output untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TxDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_sale: Option<bool>,
    /// Domain name, usually hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<DetailAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering: Option<DetailAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<DetailAmount>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An amount embedded in transaction detail, either as a currency object or a
/// wire string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DetailAmount {
    Currency { currency: String, value: String },
    Wire(String),
    Other(serde_json::Value),
}

/// A transaction row as shown to the queried account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedTransaction {
    #[serde(rename = "txHash")]
    pub hash: String,
    #[serde(rename = "txType")]
    pub type_code: TypeCode,
    #[serde(rename = "txKind")]
    pub kind: TxKind,
    #[serde(rename = "txFrom")]
    pub from: String,
    #[serde(rename = "txTo")]
    pub to: String,
    /// Signed value, e.g. `"(-1 OLT)"`, `"1 OLT"` or `""`.
    #[serde(rename = "txValue")]
    pub display_value: String,
    /// Unsigned value with currency suffix, before sign resolution.
    #[serde(rename = "txOriginalValue")]
    pub original_value: String,
    #[serde(rename = "currentHeight")]
    pub block_height: u64,
    pub memo: String,
    #[serde(rename = "txDetail")]
    pub detail: TxDetail,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub gas_price: String,
    pub gas_used: u64,
    pub total_fee: String,
    /// Decoded domain name for ONS transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// A raw transaction that could not be turned into display rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedTransaction {
    pub hash: String,
    pub kind: TxKind,
    pub reason: String,
}

/// Result of running the pipeline over one batch of raw transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProcessedHistory {
    pub transactions: Vec<ClassifiedTransaction>,
    pub rejected: Vec<RejectedTransaction>,
}
