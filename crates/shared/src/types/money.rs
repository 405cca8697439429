//! Currency codes.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; this module only names their currency.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// ISO 4217 currency codes supported by the system.
///
/// Codes are matched case-insensitively on input and written UPPERCASE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Moroccan Dirham
    Mad,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Self; 4] = [Self::Usd, Self::Eur, Self::Gbp, Self::Mad];

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Mad => "MAD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| AppError::Validation(format!("Unknown currency: {s}")))
    }
}

impl TryFrom<String> for Currency {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Serde adapter for the currency of an incoming record.
///
/// Unsupported codes, non-strings and `null` read as `None` instead of
/// failing the whole document. Use with `#[serde(default)]`.
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Currency;

    /// Serializes as the ISO code or `null`.
    pub fn serialize<S: Serializer>(
        currency: &Option<Currency>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        currency.serialize(serializer)
    }

    /// Deserializes any value, keeping only supported currency codes.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Currency>, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().and_then(|code| code.parse().ok()))
    }
}
