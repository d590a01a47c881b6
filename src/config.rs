//! Station configuration

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Names pre-filled as credit and debit lines on a new reading
pub const DEFAULT_LINE_NAMES: [&str; 7] = [
    "GPAY",
    "CARD",
    "UNISAT",
    "ENAMAKAL",
    "MARIYAS",
    "VIKASH",
    "KAVALAKKAD",
];

/// Settings that vary between stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationConfig {
    /// Symbol printed before formatted amounts
    pub currency_symbol: String,
    /// Credit lines every new reading starts with
    pub default_credit_names: Vec<String>,
    /// Debit lines every new reading starts with
    pub default_debit_names: Vec<String>,
}

impl Default for StationConfig {
    fn default() -> Self {
        let names: Vec<String> = DEFAULT_LINE_NAMES.iter().map(|s| s.to_string()).collect();
        Self {
            currency_symbol: "₹".to_string(),
            default_credit_names: names.clone(),
            default_debit_names: names,
        }
    }
}

impl StationConfig {
    /// Load configuration from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> StationResult<Self> {
        serde_json::from_str(json).map_err(|e| StationError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StationConfig::from_json(r#"{ "currencySymbol": "Rs. " }"#).unwrap();
        assert_eq!(config.currency_symbol, "Rs. ");
        assert_eq!(config.default_credit_names.len(), 7);
        assert_eq!(config.default_debit_names[0], "GPAY");
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            StationConfig::from_json("{ not json"),
            Err(StationError::Config(_))
        ));
    }
}
