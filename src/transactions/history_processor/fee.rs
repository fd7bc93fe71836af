use std::fmt::{self, Display};

use thiserror::Error;

use super::formatting::format_js_number;
use super::parsing::display_wire_amount;
use super::types::RawFee;
use crate::amount::SETTLEMENT_CURRENCY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    #[error("Fee calculation error: {currency:?} is not the settlement currency")]
    FeeCalculation { currency: String },

    #[error("Failed to parse tx gas price {0:?}")]
    ParseGasPrice(String),
}

/// A decimal price with its currency symbol, e.g. `0.000000001 OLT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub value: String,
    pub currency: String,
}

impl Price {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }

    /// Splits a display value such as `"0.5 OLT"` at the first space.
    pub fn parse(display: &str) -> Self {
        let (value, currency) = display.split_once(' ').unwrap_or((display, ""));
        Self::new(value, currency)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Fee columns of a classified transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSummary {
    pub gas_price: String,
    pub gas_used: u64,
    pub total_fee: String,
}

/// Total fee as `"<gas * price> OLT"`.
///
/// The product is a double-precision multiplication over the decimal price, so
/// very large gas quantities lose precision exactly as the explorer UI does.
pub fn compute_fee(gas: u64, gas_price: &Price) -> Result<String, FeeError> {
    if gas_price.currency != SETTLEMENT_CURRENCY.symbol() {
        return Err(FeeError::FeeCalculation {
            currency: gas_price.currency.clone(),
        });
    }

    let price: f64 = gas_price
        .value
        .trim()
        .parse()
        .map_err(|_| FeeError::ParseGasPrice(gas_price.value.clone()))?;
    let total = gas as f64 * price;

    Ok(format!("{} {}", format_js_number(total), SETTLEMENT_CURRENCY.symbol()))
}

/// Builds the fee columns for a raw transaction.
///
/// A missing or unreadable gas price counts as zero settlement currency; a
/// readable price in another currency is an error.
pub fn summarize_fee(fee: Option<&RawFee>) -> Result<FeeSummary, FeeError> {
    let gas_used = fee.map(|f| f.gas).unwrap_or(0);
    let gas_price = display_wire_amount(fee.and_then(|f| f.amount.as_deref()));
    let total_fee = compute_fee(gas_used, &Price::parse(&gas_price))?;

    Ok(FeeSummary {
        gas_price,
        gas_used,
        total_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_fee() {
        assert_eq!(compute_fee(4, &Price::new("0.5", "OLT")).unwrap(), "2 OLT");
        assert_eq!(compute_fee(3, &Price::new("0.25", "OLT")).unwrap(), "0.75 OLT");
        assert_eq!(compute_fee(0, &Price::new("10", "OLT")).unwrap(), "0 OLT");
    }

    #[test]
    fn test_compute_fee_rejects_other_currency() {
        let err = compute_fee(100, &Price::new("1", "ETH")).unwrap_err();
        assert_eq!(
            err,
            FeeError::FeeCalculation {
                currency: "ETH".to_string()
            }
        );
    }

    #[test]
    fn test_compute_fee_checks_currency_before_price() {
        let err = compute_fee(100, &Price::new("abc", "ETH")).unwrap_err();
        assert_eq!(
            err,
            FeeError::FeeCalculation {
                currency: "ETH".to_string()
            }
        );
    }

    #[test]
    fn test_compute_fee_rejects_unparseable_price() {
        let err = compute_fee(100, &Price::new("abc", "OLT")).unwrap_err();
        assert_eq!(err, FeeError::ParseGasPrice("abc".to_string()));
    }

    #[test]
    fn test_compute_fee_huge_gas_uses_float_arithmetic() {
        let fee = compute_fee(u64::MAX, &Price::new("1", "OLT")).unwrap();
        assert_eq!(fee, "18446744073709552000 OLT");
    }

    #[test]
    fn test_summarize_fee() {
        let fee = RawFee {
            amount: Some("500000000000000000 OLT".to_string()),
            gas: 4,
        };
        let summary = summarize_fee(Some(&fee)).unwrap();
        assert_eq!(summary.gas_price, "0.5 OLT");
        assert_eq!(summary.gas_used, 4);
        assert_eq!(summary.total_fee, "2 OLT");
    }

    #[test]
    fn test_summarize_fee_missing_fee_is_zero() {
        let summary = summarize_fee(None).unwrap();
        assert_eq!(summary.gas_price, "0 OLT");
        assert_eq!(summary.total_fee, "0 OLT");
    }

    #[test]
    fn test_summarize_fee_unregistered_currency_is_zero() {
        let fee = RawFee {
            amount: Some("100 ABC".to_string()),
            gas: 10,
        };
        assert_eq!(summarize_fee(Some(&fee)).unwrap().total_fee, "0 OLT");
    }

    #[test]
    fn test_summarize_fee_non_settlement_currency_fails() {
        let fee = RawFee {
            amount: Some("1000000000000000000 ETH".to_string()),
            gas: 10,
        };
        assert!(matches!(
            summarize_fee(Some(&fee)),
            Err(FeeError::FeeCalculation { .. })
        ));
    }
}
