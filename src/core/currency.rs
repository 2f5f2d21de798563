//! Supported currency codes and their display symbols.

use serde::{Deserialize, Serialize};

/// Closed set of supported ISO 4217 currency codes.
///
/// Deserialization is lenient: an unrecognized stored code falls back to
/// [`Currency::Usd`] rather than failing the whole record, matching the
/// "unknown codes display as $" rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Aud,
    Cad,
    Jpy,
}

impl Currency {
    /// ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Jpy => "JPY",
        }
    }

    /// Parse from an ISO 4217 code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            "INR" => Some(Self::Inr),
            "AUD" => Some(Self::Aud),
            "CAD" => Some(Self::Cad),
            "JPY" => Some(Self::Jpy),
            _ => None,
        }
    }

    /// Display symbol for amounts in this currency.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd | Self::Aud | Self::Cad => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
            Self::Jpy => "¥",
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::from_code(&code).unwrap_or_default()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Display symbol for a raw currency code; unknown codes fall back to "$".
pub fn symbol_for_code(code: &str) -> &'static str {
    Currency::from_code(code).map_or("$", |c| c.symbol())
}
