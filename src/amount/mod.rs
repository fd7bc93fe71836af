//! Amount codec.
//!
//! Ledger amounts travel as integer strings in the smallest on-chain unit
//! ("fixed-point", scaled by `10^decimals`). Users read canonical decimal
//! strings instead. This module converts between the two without going through
//! floating point.
//!
//! Both directions are total: malformed input yields [`AmountError`] when
//! encoding and an empty string when decoding, never a panic.

mod currency;

pub use currency::{Currency, CurrencyAmount, CurrencyClass, SETTLEMENT_CURRENCY};

use primitive_types::U256;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Invalid amount {amount:?}: {reason}")]
    InvalidAmount { amount: String, reason: &'static str },
}

impl AmountError {
    fn invalid(amount: &str, reason: &'static str) -> Self {
        Self::InvalidAmount {
            amount: amount.to_string(),
            reason,
        }
    }
}

/// Returns true if `s` is a non-empty string of ASCII digits.
pub fn is_fixed_point(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Largest scale accepted by the codec. No registered currency uses more.
pub const MAX_DECIMALS: u32 = 18;

/// Amounts written with a decimal point are always scaled by `10^18`,
/// whatever `decimals` says. Request prices are built this way by the ledger
/// SDK and the explorer expects it.
pub const FRACTIONAL_SCALE: u32 = 18;

/// Converts a decimal string (e.g. `"12.5"`) into its smallest-unit integer
/// representation.
///
/// Accepts digits with at most one `.`; either side of the point may be empty
/// (`"5."`, `".5"`) but at least one digit must be present. Whole numbers are
/// scaled by `10^decimals`; anything containing a point is scaled by
/// `10^FRACTIONAL_SCALE`, so `("1.5", 8)` gives `"1500000000000000000"`.
/// Fractions longer than that scale, `decimals` above [`MAX_DECIMALS`] and
/// results that do not fit in 256 bits are rejected.
pub fn to_fixed_point(decimal: &str, decimals: u32) -> Result<String, AmountError> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::invalid(decimal, "too many decimal places"));
    }
    if decimal.is_empty() {
        return Err(AmountError::invalid(decimal, "amount is empty"));
    }
    if !decimal.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(AmountError::invalid(decimal, "only digits and a decimal point are allowed"));
    }
    if decimal.bytes().filter(|&b| b == b'.').count() > 1 {
        return Err(AmountError::invalid(decimal, "more than one decimal point"));
    }
    if !decimal.bytes().any(|b| b.is_ascii_digit()) {
        return Err(AmountError::invalid(decimal, "amount has no digits"));
    }
    if decimal == "0" {
        return Ok("0".to_string());
    }

    let (integer, fraction, scale) = match decimal.split_once('.') {
        Some((integer, fraction)) => (integer, fraction, FRACTIONAL_SCALE),
        None => (decimal, "", decimals),
    };
    let fraction_len = u32::try_from(fraction.len()).unwrap_or(u32::MAX);
    if fraction_len > scale {
        return Err(AmountError::invalid(decimal, "more than 18 fractional digits"));
    }

    let overflow = || AmountError::invalid(decimal, "amount does not fit in 256 bits");
    let integer = parse_digits(integer).ok_or_else(overflow)?;
    let fraction = parse_digits(fraction).ok_or_else(overflow)?;

    let scaled_integer = pow10(scale)
        .and_then(|factor| integer.checked_mul(factor))
        .ok_or_else(overflow)?;
    let scaled_fraction = pow10(scale - fraction_len)
        .and_then(|factor| fraction.checked_mul(factor))
        .ok_or_else(overflow)?;

    scaled_integer
        .checked_add(scaled_fraction)
        .map(|total| total.to_string())
        .ok_or_else(overflow)
}

/// Converts a smallest-unit integer string into a canonical decimal string.
///
/// Returns `""` if `fixed` is not a non-empty digit string or `decimals` is
/// above [`MAX_DECIMALS`]. The integer part is kept as given; only the
/// fractional part is canonicalized.
pub fn from_fixed_point(fixed: &str, decimals: u32) -> String {
    if !is_fixed_point(fixed) || decimals > MAX_DECIMALS {
        return String::new();
    }

    let decimals = decimals as usize;
    let (integer, fraction) = if fixed.len() > decimals {
        let (integer, fraction) = fixed.split_at(fixed.len() - decimals);
        (integer.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", fixed, width = decimals))
    };

    join_canonical(&integer, &fraction)
}

/// Strips insignificant trailing fractional zeros and a trailing bare `.`.
pub fn canonical_decimal(decimal: &str) -> String {
    match decimal.split_once('.') {
        Some((integer, fraction)) => join_canonical(integer, fraction),
        None => decimal.to_string(),
    }
}

fn join_canonical(integer: &str, fraction: &str) -> String {
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

fn parse_digits(digits: &str) -> Option<U256> {
    if digits.is_empty() {
        return Some(U256::zero());
    }
    U256::from_dec_str(digits).ok()
}

fn pow10(exponent: u32) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exponent))
}
