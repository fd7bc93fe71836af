use serde::{Deserialize, Deserializer};

use super::error::ProcessorError;
use super::types::{DetailAmount, RawTransaction, RejectedTransaction, TxKind};
use crate::amount::{Currency, CurrencyAmount, SETTLEMENT_CURRENCY};

/// Decodes a hex-encoded domain name, with or without a `0x` prefix.
///
/// Returns an empty string for empty input, a bare prefix, or input that is
/// not valid hex. Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_name(hex_name: &str) -> String {
    try_decode_name(hex_name).unwrap_or_default()
}

/// Strict variant of [`decode_name`]: `None` if the input is not valid hex.
pub fn try_decode_name(hex_name: &str) -> Option<String> {
    let digits = hex_name.strip_prefix("0x").unwrap_or(hex_name);
    let bytes = hex::decode(digits).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Renders a wire amount for display, falling back to zero settlement currency
/// when the amount is missing or not a registered `"<integer> <SYMBOL>"` pair.
pub fn display_wire_amount(amount: Option<&str>) -> String {
    amount
        .and_then(CurrencyAmount::parse_wire)
        .unwrap_or_else(|| CurrencyAmount::zero(SETTLEMENT_CURRENCY))
        .to_display()
}

/// Returns true if `amount` is a wire amount in a registered currency.
pub fn is_registered_amount(amount: &str) -> bool {
    CurrencyAmount::parse_wire(amount).is_some()
}

impl DetailAmount {
    pub fn to_currency_amount(&self) -> Option<CurrencyAmount> {
        match self {
            Self::Currency { currency, value } => CurrencyAmount::new(value.as_str(), Currency::from_symbol(currency)?),
            Self::Wire(wire) => CurrencyAmount::parse_wire(wire),
            Self::Other(_) => None,
        }
    }
}

/// Decodes one explorer record.
///
/// A record that does not fit [`RawTransaction`] comes back as a rejection
/// carrying whatever hash and kind could still be read from it.
pub fn decode_transaction(value: serde_json::Value) -> Result<RawTransaction, RejectedTransaction> {
    let hash = value
        .get("hash")
        .and_then(|hash| hash.as_str())
        .unwrap_or_default()
        .to_string();
    let kind = value
        .get("type")
        .and_then(|kind| TxKind::deserialize(kind).ok())
        .unwrap_or(TxKind::Unknown);

    serde_json::from_value(value).map_err(|e| RejectedTransaction {
        hash,
        kind,
        reason: ProcessorError::ParseError(e.to_string()).to_string(),
    })
}

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_name() {
        assert_eq!(decode_name("0x74657374"), "test");
        assert_eq!(decode_name("74657374646f6d61696e312e6f6c74"), "testdomain1.olt");
        assert_eq!(decode_name("0x6e616d653d6b6172696d2e6574682c"), "name=karim.eth,");
    }

    #[test]
    fn test_decode_name_empty_input() {
        assert_eq!(decode_name(""), "");
        assert_eq!(decode_name("0x"), "");
    }

    #[test]
    fn test_decode_name_malformed_hex() {
        assert_eq!(decode_name("0x746"), "");
        assert_eq!(decode_name("zz"), "");
        assert_eq!(try_decode_name("purchasetestdomain2.ol"), None);
    }

    #[test]
    fn test_display_wire_amount_falls_back_to_zero() {
        assert_eq!(display_wire_amount(Some("2000000000000000000 OLT")), "2 OLT");
        assert_eq!(display_wire_amount(Some("5 ABC")), "0 OLT");
        assert_eq!(display_wire_amount(None), "0 OLT");
    }

    #[test]
    fn test_decode_transaction_tolerates_nulls() {
        let tx = decode_transaction(serde_json::json!({
            "hash": "0x01",
            "type": "STAKE",
            "from": null,
            "blockHeight": null,
            "fee": {"amount": null, "gas": null}
        }))
        .unwrap();

        assert_eq!(tx.block_height, 0);
        assert_eq!(tx.fee.unwrap().gas, 0);
    }

    #[test]
    fn test_decode_transaction_rejects_mistyped_record() {
        let rejected = decode_transaction(serde_json::json!({
            "hash": "0x02",
            "type": "DOMAIN_SELL",
            "blockHeight": "tall"
        }))
        .unwrap_err();

        assert_eq!(rejected.hash, "0x02");
        assert_eq!(rejected.kind, TxKind::DomainSell);
        assert!(rejected.reason.starts_with("Failed to parse transaction data"));
    }

    #[test]
    fn test_decode_transaction_without_hash_or_type() {
        let rejected = decode_transaction(serde_json::json!({"type": 7})).unwrap_err();
        assert_eq!(rejected.hash, "");
        assert_eq!(rejected.kind, TxKind::Unknown);
    }

    #[test]
    fn test_is_registered_amount() {
        assert!(is_registered_amount("1000000000000000000 OLT"));
        assert!(is_registered_amount("150000000 btc"));
        assert!(is_registered_amount("42"));
        assert!(!is_registered_amount("5 ABC"));
        assert!(!is_registered_amount("1.5 OLT"));
        assert!(!is_registered_amount(""));
    }

    #[test]
    fn test_detail_amount_to_currency_amount() {
        let offering = DetailAmount::Currency {
            currency: "OLT".to_string(),
            value: "1010000000000000000000".to_string(),
        };
        assert_eq!(offering.to_currency_amount().unwrap().to_display(), "1010 OLT");

        let unknown = DetailAmount::Currency {
            currency: "XYZ".to_string(),
            value: "1".to_string(),
        };
        assert!(unknown.to_currency_amount().is_none());
    }
}
