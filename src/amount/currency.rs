use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{from_fixed_point, is_fixed_point};

/// The only currency accepted for transaction fees.
pub const SETTLEMENT_CURRENCY: Currency = Currency::Olt;

/// Currencies registered with the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Olt,
    Eth,
    Btc,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Olt, Currency::Eth, Currency::Btc];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Olt => "OLT",
            Self::Eth => "ETH",
            Self::Btc => "BTC",
        }
    }

    /// Number of decimal places between the display unit and the smallest unit.
    pub fn decimals(&self) -> u32 {
        match self {
            Self::Olt => 18,
            Self::Eth => 18,
            Self::Btc => 8,
        }
    }

    /// Case-insensitive lookup by ticker symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn class(&self) -> CurrencyClass {
        match self {
            Self::Olt => CurrencyClass::Settlement,
            Self::Eth => CurrencyClass::Ether,
            Self::Btc => CurrencyClass::Other,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| format!("currency {} is not registered", s))
    }
}

/// How a value's currency affects transfer classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyClass {
    /// The native settlement token (OLT).
    Settlement,
    /// Wrapped ether (OETH).
    Ether,
    Other,
}

impl CurrencyClass {
    /// Reads the currency suffix of a display value such as `"1.5 OLT"`.
    ///
    /// The symbol must match exactly; display values are always produced with
    /// upper-case symbols.
    pub fn of_display_value(value: &str) -> Self {
        let symbol = value.split(' ').nth(1).unwrap_or_default();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.symbol() == symbol)
            .map(|currency| currency.class())
            .unwrap_or(CurrencyClass::Other)
    }
}

/// A smallest-unit amount tagged with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub value: String,
    pub currency: Currency,
}

impl CurrencyAmount {
    pub fn new(value: impl Into<String>, currency: Currency) -> Option<Self> {
        let value = value.into();
        is_fixed_point(&value).then_some(Self { value, currency })
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            value: "0".to_string(),
            currency,
        }
    }

    /// Parses the explorer wire format `"<integer> <SYMBOL>"`.
    ///
    /// A bare integer without a symbol is read in the settlement currency.
    /// Anything else, including unregistered symbols, yields `None`.
    pub fn parse_wire(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let value = parts.next()?;
        let currency = match parts.next() {
            Some(symbol) => Currency::from_symbol(symbol)?,
            None => SETTLEMENT_CURRENCY,
        };
        if parts.next().is_some() {
            return None;
        }
        Self::new(value, currency)
    }

    /// Canonical decimal value without the currency suffix.
    pub fn to_decimal(&self) -> String {
        from_fixed_point(&self.value, self.currency.decimals())
    }

    /// Decimal value followed by the currency symbol, e.g. `"1.5 OLT"`.
    pub fn to_display(&self) -> String {
        format!("{} {}", self.to_decimal(), self.currency.symbol())
    }
}

impl Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}
