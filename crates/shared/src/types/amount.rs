//! Tolerant monetary amounts.
//!
//! Amounts reach the engine in whatever shape the persistence layer
//! produced: a JSON number, a fixed-point decimal serialized as a string,
//! `null`, or something else entirely. [`RawAmount`] captures that shape
//! and [`to_number`] is the one place it is turned into a `Decimal`.
//!
//! Coercion never fails. Anything that is not a number or a numeric
//! string becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount as received, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A numeric value (JSON number or a string `Decimal` accepts as-is).
    Number(Decimal),
    /// Any other string; parsed leniently.
    Text(String),
    /// `null` or an absent field.
    #[default]
    Missing,
    /// Booleans, arrays, objects, or numbers outside `Decimal` range.
    Other(serde_json::Value),
}

impl RawAmount {
    /// Returns the coerced value. See [`to_number`].
    #[must_use]
    pub fn value(&self) -> Decimal {
        to_number(self)
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Coerces a raw amount into a finite `Decimal`.
///
/// - numbers are used as-is
/// - strings yield their longest leading float literal, ignoring leading
///   whitespace and trailing garbage (`"12abc"` is 12)
/// - everything else, and any string without a literal, is zero
#[must_use]
pub fn to_number(value: &RawAmount) -> Decimal {
    match value {
        RawAmount::Number(amount) => *amount,
        RawAmount::Text(text) => parse_leading_decimal(text).unwrap_or(Decimal::ZERO),
        RawAmount::Missing | RawAmount::Other(_) => Decimal::ZERO,
    }
}

/// Parses the float literal at the start of `text`.
///
/// Grammar: `[+-]? digits [. digits] [(e|E) [+-]? digits]`, with at least
/// one digit in the mantissa. A dangling exponent marker is ignored.
fn parse_leading_decimal(text: &str) -> Option<Decimal> {
    let bytes = text.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let exponent = parse_exponent(&bytes[pos..]);

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        mantissa.push('-');
    }
    if int_digits.is_empty() {
        mantissa.push('0');
    } else {
        mantissa.push_str(std::str::from_utf8(int_digits).ok()?);
    }
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(std::str::from_utf8(frac_digits).ok()?);
    }

    if exponent == 0 {
        return Decimal::from_str(&mantissa).ok();
    }

    // Exponents past the 28-digit scale are rejected, which reads as zero.
    Decimal::from_scientific_lossy(&format!("{mantissa}e{exponent}")).ok()
}

/// Reads an optional exponent suffix. Returns 0 when absent or malformed.
fn parse_exponent(bytes: &[u8]) -> i32 {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let mut pos = 1;
    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if start == pos {
        return 0;
    }

    // Digits only, so a parse failure means overflow.
    let magnitude = std::str::from_utf8(&bytes[start..pos])
        .ok()
        .and_then(|digits| digits.parse::<i32>().ok())
        .unwrap_or(i32::MAX);

    if negative { -magnitude } else { magnitude }
}
