//! Coercion of raw numeric input into decimals

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::types::*;

/// Largest exponent magnitude accepted in scientific notation, the range of an f64
///
/// Larger positive exponents overflow and count as non-numeric; larger negative
/// exponents underflow to zero.
const MAX_EXPONENT: u32 = 308;

/// Parse the longest decimal prefix of `text`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Trailing garbage after the prefix is ignored (`"12.5kg"` is 12.5).
/// Returns `None` when no digits start the text.
pub fn parse_amount(text: &str) -> Option<BigDecimal> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
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
    let int_part = &trimmed[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if !int_part.is_empty() || frac_end > frac_start {
            frac_part = &trimmed[frac_start..frac_end];
            pos = frac_end;
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        let exp_negative = match bytes.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                true
            }
            Some(b'+') => {
                exp_pos += 1;
                false
            }
            _ => false,
        };
        let digits_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        let digits = &trimmed[digits_start..exp_pos];
        if !digits.is_empty() {
            let magnitude = digits.parse::<u32>().unwrap_or(u32::MAX);
            if magnitude > MAX_EXPONENT {
                return if exp_negative {
                    Some(BigDecimal::from(0))
                } else {
                    None
                };
            }
            exponent = format!("e{}{}", if exp_negative { "-" } else { "" }, magnitude);
        }
    }

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 8);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    normalized.push_str(&exponent);

    BigDecimal::from_str(&normalized).ok()
}

/// A numeric field exactly as it arrived: JSON number, text, null or absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAmount(pub Value);

impl RawAmount {
    /// Parsed value, if the raw input has a numeric prefix
    pub fn parse(&self) -> Option<BigDecimal> {
        match &self.0 {
            Value::Number(number) => parse_amount(&number.to_string()),
            Value::String(text) => parse_amount(text),
            _ => None,
        }
    }

    /// Parsed value, or zero when absent or unparsable
    pub fn resolve(&self) -> BigDecimal {
        self.parse().unwrap_or_else(|| BigDecimal::from(0))
    }

    /// Whether nothing was entered
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Whether something was entered that is not a number
    pub fn is_invalid(&self) -> bool {
        !self.is_blank() && self.parse().is_none()
    }

    /// Parsed value, rejecting blank and non-numeric input
    pub fn strict(&self, field: &str) -> StationResult<BigDecimal> {
        if self.is_blank() {
            return Err(StationError::Validation(format!("{} is required", field)));
        }
        self.parse().ok_or_else(|| StationError::InvalidField {
            field: field.to_string(),
            value: self.display_value(),
        })
    }

    /// The raw input as text, for error messages
    pub fn display_value(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(text: &str) -> Self {
        Self(Value::String(text.to_string()))
    }
}

impl From<&BigDecimal> for RawAmount {
    fn from(amount: &BigDecimal) -> Self {
        Self(Value::String(amount.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_parse_amount_prefixes() {
        assert_eq!(parse_amount("42"), Some(dec("42")));
        assert_eq!(parse_amount("  -3.75"), Some(dec("-3.75")));
        assert_eq!(parse_amount("+8"), Some(dec("8")));
        assert_eq!(parse_amount(".5"), Some(dec("0.5")));
        assert_eq!(parse_amount("5."), Some(dec("5")));
        assert_eq!(parse_amount("12.5kg"), Some(dec("12.5")));
        assert_eq!(parse_amount("1e3"), Some(dec("1000")));
        assert_eq!(parse_amount("2.5E-1"), Some(dec("0.25")));
        assert_eq!(parse_amount("7e"), Some(dec("7")));
    }

    #[test]
    fn test_parse_amount_large_exponents() {
        assert_eq!(parse_amount("1e65"), Some(dec("1e65")));
        assert_eq!(parse_amount("1e-65"), Some(dec("1e-65")));
        assert_eq!(parse_amount("1e+70"), Some(dec("1e70")));
        assert_eq!(parse_amount("2.5e308"), Some(dec("2.5e308")));
        assert_eq!(parse_amount("1e-400"), Some(BigDecimal::from(0)));
        assert_eq!(parse_amount("1e-99999999999"), Some(BigDecimal::from(0)));
        assert_eq!(parse_amount("1e309"), None);

        assert!(!RawAmount::from("1e65").is_invalid());
        assert!(!RawAmount::from("1e-65").is_invalid());
        assert!(RawAmount::from("1e999").is_invalid());
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("Infinity"), None);
        assert_eq!(parse_amount("1e999"), None);
    }

    #[test]
    fn test_raw_amount_resolution() {
        let number: RawAmount = serde_json::from_str("101.5").unwrap();
        assert_eq!(number.resolve(), dec("101.5"));

        let text: RawAmount = serde_json::from_str("\"88\"").unwrap();
        assert_eq!(text.resolve(), dec("88"));

        let null: RawAmount = serde_json::from_str("null").unwrap();
        assert!(null.is_blank());
        assert_eq!(null.resolve(), BigDecimal::from(0));

        let junk = RawAmount::from("abc");
        assert!(junk.is_invalid());
        assert_eq!(junk.resolve(), BigDecimal::from(0));

        let flag: RawAmount = serde_json::from_str("true").unwrap();
        assert!(flag.is_invalid());
    }

    #[test]
    fn test_strict_parsing() {
        assert_eq!(RawAmount::from("96.2").strict("petrolPrice").unwrap(), dec("96.2"));
        assert!(matches!(
            RawAmount::from("").strict("petrolPrice"),
            Err(StationError::Validation(_))
        ));
        assert!(matches!(
            RawAmount::from("n/a").strict("petrolPrice"),
            Err(StationError::InvalidField { .. })
        ));
    }
}
