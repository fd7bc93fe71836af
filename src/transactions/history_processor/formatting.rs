use super::types::TxKind;

/// Wraps a display value as a debit, e.g. `"5 OLT"` becomes `"(-5 OLT)"`.
///
/// Empty values stay empty. Not idempotent: wrapping twice nests parentheses.
pub fn wrap_negative(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("(-{})", value)
    }
}

/// Decides how a transaction's value is shown to the queried account.
///
/// Only senders of value-moving kinds see a debit. A sale listing moves no
/// funds, so its sender sees no value at all.
pub fn resolve_sign(kind: TxKind, is_sender: bool, raw_value: &str) -> String {
    match (kind, is_sender) {
        (TxKind::DomainSell, true) => String::new(),
        (TxKind::DomainPurchase | TxKind::Send | TxKind::DomainSend, true) => wrap_negative(raw_value),
        _ => raw_value.to_string(),
    }
}

/// Formats a float the way ECMAScript's `Number#toString` does.
///
/// Plain notation between `1e-6` and `1e21`, exponent notation with an
/// explicit sign outside that range.
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => formatted,
    }
}
