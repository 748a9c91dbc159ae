//! Dated amount entries tracked by the calculators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Clock, SystemClock},
    errors::CalculatorError,
};

/// Day-precision format used for stored record dates, e.g. `03.05.2023`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Formats `date` the way records store it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A single spending or consumption entry.
///
/// The date is kept as the string it was created with; it is only parsed when
/// a report needs calendar arithmetic, so a malformed date is accepted here
/// and rejected by [`Record::parse_date`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: String,
}

impl Record {
    /// Creates a record dated today according to the system clock.
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        Self::dated_by(amount, comment, &SystemClock)
    }

    /// Creates a record with an explicit `dd.mm.yyyy` date string.
    pub fn dated(amount: f64, comment: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date: date.into(),
        }
    }

    /// Creates a record dated today according to `clock`.
    pub fn dated_by(amount: f64, comment: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::dated(amount, comment, format_date(clock.today()))
    }

    /// Builds a record from an optional date, falling back to `clock`'s today.
    pub fn from_parts(
        amount: f64,
        comment: impl Into<String>,
        date: Option<String>,
        clock: &dyn Clock,
    ) -> Self {
        match date {
            Some(date) => Self::dated(amount, comment, date),
            None => Self::dated_by(amount, comment, clock),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Stored date string, exactly as supplied or resolved at construction.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn parse_date(&self) -> Result<NaiveDate, CalculatorError> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| {
            CalculatorError::InvalidDate {
                date: self.date.clone(),
                source,
            }
        })
    }
}
