use std::sync::Arc;

use tracing::debug;

use crate::{
    core::Clock,
    currency::{format_amount, RateTable},
    errors::CalculatorError,
};

use super::calculator::{Calculator, LimitTracker};

pub const NO_MONEY_RESPONSE: &str = "No money left, hold on";

/// Daily spending tracker reporting in any configured currency.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    inner: Calculator,
    rates: RateTable,
}

impl CashCalculator {
    pub fn new(limit: f64) -> Self {
        Self::from_calculator(Calculator::new(limit))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self::from_calculator(Calculator::with_clock(limit, clock))
    }

    fn from_calculator(inner: Calculator) -> Self {
        Self {
            inner,
            rates: RateTable::default(),
        }
    }

    /// Replaces the currency table used for reports.
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Describes today's remaining budget converted into `currency`.
    ///
    /// An unconfigured currency is an error even when nothing is left.
    pub fn get_today_cash_remained(&self, currency: &str) -> Result<String, CalculatorError> {
        let rate = self.rates.lookup(currency)?;
        let remaining = self.get_remaining_value();
        let value = rate.convert(remaining);
        debug!(currency, remaining, value, "computed cash remainder");

        let message = if remaining > 0.0 {
            format!(
                "Today you have {} {} left",
                format_amount(value),
                rate.label
            )
        } else if remaining == 0.0 {
            NO_MONEY_RESPONSE.to_string()
        } else {
            format!(
                "{}: your debt is {} {}",
                NO_MONEY_RESPONSE,
                format_amount(value),
                rate.label
            )
        };
        Ok(message)
    }
}

impl LimitTracker for CashCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{core::FixedClock, currency::CurrencyRate, ledger::Record};

    const TODAY: &str = "15.06.2023";

    fn cash(limit: f64) -> CashCalculator {
        let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        CashCalculator::with_clock(limit, Arc::new(FixedClock::new(today)))
    }

    #[test]
    fn positive_remainder_is_converted() {
        let mut calc = cash(1000.0);
        calc.add_record(Record::dated(100.0, "Lunch", TODAY));
        assert_eq!(
            calc.get_today_cash_remained("rub").unwrap(),
            "Today you have 900.0 руб left"
        );
        assert_eq!(
            calc.get_today_cash_remained("usd").unwrap(),
            "Today you have 11.25 USD left"
        );
        assert_eq!(
            calc.get_today_cash_remained("eur").unwrap(),
            "Today you have 9.0 Euro left"
        );
    }

    #[test]
    fn zero_remainder_has_no_amount() {
        let mut calc = cash(1000.0);
        calc.add_record(Record::dated(1000.0, "Rent", TODAY));
        for code in ["rub", "usd", "eur"] {
            assert_eq!(calc.get_today_cash_remained(code).unwrap(), NO_MONEY_RESPONSE);
        }
    }

    #[test]
    fn debt_keeps_negative_sign() {
        let mut calc = cash(1000.0);
        calc.add_record(Record::dated(6000.0, "Phone", TODAY));
        assert_eq!(
            calc.get_today_cash_remained("usd").unwrap(),
            "No money left, hold on: your debt is -62.5 USD"
        );
        assert_eq!(
            calc.get_today_cash_remained("eur").unwrap(),
            "No money left, hold on: your debt is -50.0 Euro"
        );
    }

    #[test]
    fn unknown_currency_fails_before_branching() {
        let calc = cash(0.0);
        assert!(matches!(
            calc.get_today_cash_remained("btc"),
            Err(CalculatorError::UnknownCurrency(code)) if code == "btc"
        ));
    }

    #[test]
    fn custom_rates_replace_the_standard_table() {
        let rates = RateTable::from_entries([("gbp", CurrencyRate::new(4.0, "GBP"))]);
        let calc = cash(10.0).with_rates(rates);
        assert_eq!(
            calc.get_today_cash_remained("gbp").unwrap(),
            "Today you have 2.5 GBP left"
        );
        assert!(calc.get_today_cash_remained("rub").is_err());
    }

    #[test]
    fn nan_limit_is_reported_as_debt() {
        let calc = cash(f64::NAN);
        assert_eq!(
            calc.get_today_cash_remained("usd").unwrap(),
            "No money left, hold on: your debt is nan USD"
        );
    }
}
