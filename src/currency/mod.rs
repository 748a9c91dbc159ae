//! Fixed conversion rates from the base currency and amount display helpers.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::errors::CalculatorError;

/// Rate expressed as units of base currency per unit of the target currency,
/// together with the label shown in messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyRate {
    pub rate: f64,
    pub label: String,
}

impl CurrencyRate {
    pub fn new(rate: f64, label: impl Into<String>) -> Self {
        Self {
            rate,
            label: label.into(),
        }
    }

    /// Converts a base-currency amount into this currency.
    pub fn convert(&self, base_amount: f64) -> f64 {
        base_amount / self.rate
    }
}

static DEFAULT_RATES: Lazy<RateTable> = Lazy::new(|| {
    RateTable::from_entries([
        ("rub", CurrencyRate::new(1.0, "руб")),
        ("usd", CurrencyRate::new(80.0, "USD")),
        ("eur", CurrencyRate::new(100.0, "Euro")),
    ])
});

/// Immutable currency lookup keyed by lowercase code.
///
/// Deserializes from a list of `[code, {"rate": .., "label": ..}]` pairs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Vec<(String, CurrencyRate)>")]
pub struct RateTable {
    entries: Vec<(String, CurrencyRate)>,
}

impl RateTable {
    /// Builds a table; a repeated code keeps its first rate.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CurrencyRate)>,
    {
        let mut table: Vec<(String, CurrencyRate)> = Vec::new();
        for (code, rate) in entries {
            let code = code.into();
            if table.iter().all(|(existing, _)| existing != &code) {
                table.push((code, rate));
            }
        }
        Self { entries: table }
    }

    /// Base currency plus dollars and euros.
    pub fn standard() -> &'static RateTable {
        &DEFAULT_RATES
    }

    /// Looks up `code` exactly as configured.
    pub fn lookup(&self, code: &str) -> Result<&CurrencyRate, CalculatorError> {
        self.entries
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, rate)| rate)
            .ok_or_else(|| CalculatorError::UnknownCurrency(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

impl From<Vec<(String, CurrencyRate)>> for RateTable {
    fn from(entries: Vec<(String, CurrencyRate)>) -> Self {
        Self::from_entries(entries)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Renders an amount for messages the way Python prints floats: integral
/// values keep one decimal place (`950.0`), magnitudes below `1e-4` or from
/// `1e16` up switch to exponent form (`1.25e-05`, `1e+16`).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_three_currencies() {
        let table = RateTable::standard();
        assert_eq!(table.codes().collect::<Vec<_>>(), vec!["rub", "usd", "eur"]);
        assert_eq!(table.lookup("rub").unwrap(), &CurrencyRate::new(1.0, "руб"));
        assert_eq!(table.lookup("usd").unwrap().rate, 80.0);
        assert_eq!(table.lookup("eur").unwrap().label, "Euro");
    }

    #[test]
    fn lookup_is_exact() {
        let table = RateTable::standard();
        assert!(matches!(
            table.lookup("USD"),
            Err(CalculatorError::UnknownCurrency(code)) if code == "USD"
        ));
        assert!(table.lookup("gbp").is_err());
    }

    #[test]
    fn duplicate_codes_keep_first_rate() {
        let table = RateTable::from_entries([
            ("usd", CurrencyRate::new(80.0, "USD")),
            ("usd", CurrencyRate::new(90.0, "USD")),
        ]);
        assert_eq!(table.codes().count(), 1);
        assert_eq!(table.lookup("usd").unwrap().rate, 80.0);
    }

    #[test]
    fn convert_divides_by_rate() {
        assert_eq!(CurrencyRate::new(80.0, "USD").convert(900.0), 11.25);
        assert_eq!(CurrencyRate::new(100.0, "Euro").convert(-4100.0), -41.0);
    }

    #[test]
    fn formats_amounts_like_float_display() {
        assert_eq!(format_amount(950.0), "950.0");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-51.25), "-51.25");
        assert_eq!(format_amount(-41.0), "-41.0");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_amount(0.0001), "0.0001");
        assert_eq!(format_amount(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn tiny_amounts_use_exponent_form() {
        assert_eq!(format_amount(1.2499999999704415e-5), "1.2499999999704415e-05");
        assert_eq!(format_amount(-0.00005), "-5e-05");
        assert_eq!(format_amount(1e-300), "1e-300");
    }

    #[test]
    fn huge_amounts_use_exponent_form() {
        assert_eq!(format_amount(1e16), "1e+16");
        assert_eq!(format_amount(-2.5e20), "-2.5e+20");
    }

    #[test]
    fn non_finite_amounts_print_like_python() {
        assert_eq!(format_amount(f64::NAN), "nan");
        assert_eq!(format_amount(f64::INFINITY), "inf");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn rate_table_deserializes_from_pairs() {
        let table: RateTable = serde_json::from_str(
            r#"[["gbp", {"rate": 4.0, "label": "GBP"}], ["gbp", {"rate": 5.0, "label": "GBP"}]]"#,
        )
        .expect("parse rates");
        assert_eq!(table.codes().collect::<Vec<_>>(), vec!["gbp"]);
        assert_eq!(table.lookup("gbp").unwrap().rate, 4.0);
    }
}
