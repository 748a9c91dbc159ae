use serde::Deserialize;

use crate::{currency::RateTable, errors::CalculatorError};

/// Limits and report preferences for a tracking session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_limit")]
    pub cash_limit: f64,
    #[serde(default = "Config::default_limit")]
    pub calories_limit: f64,
    /// Currencies reported by the cash summary, in order.
    #[serde(default = "Config::default_currencies")]
    pub currencies: Vec<String>,
    /// Conversion table used by the cash calculator.
    #[serde(default)]
    pub rates: RateTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cash_limit: Self::default_limit(),
            calories_limit: Self::default_limit(),
            currencies: Self::default_currencies(),
            rates: RateTable::default(),
        }
    }
}

impl Config {
    pub fn default_limit() -> f64 {
        1000.0
    }

    pub fn default_currencies() -> Vec<String> {
        vec!["rub".into(), "usd".into(), "eur".into()]
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self, CalculatorError> {
        serde_json::from_str(data).map_err(|err| CalculatorError::Config(err.to_string()))
    }
}
