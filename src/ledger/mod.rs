//! Dated records and the calculators that aggregate them.

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod record;

pub use calculator::{Calculator, LimitTracker, WEEK_DAYS};
pub use calories::{CaloriesCalculator, NO_CALORIES_RESPONSE};
pub use cash::{CashCalculator, NO_MONEY_RESPONSE};
pub use record::{format_date, Record, DATE_FORMAT};
