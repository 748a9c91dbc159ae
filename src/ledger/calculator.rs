//! Shared aggregation over dated records.

use std::{fmt, sync::Arc};

use chrono::Duration;
use tracing::{debug, warn};

use crate::{
    core::{Clock, SystemClock},
    errors::CalculatorError,
};

use super::record::{format_date, Record};

/// Length of the trailing window reported by [`Calculator::get_week_stats`].
pub const WEEK_DAYS: i64 = 7;

/// Holds a daily limit and the records counted against it.
#[derive(Clone)]
pub struct Calculator {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Calculator {
    /// Creates an empty calculator that reads today from the system clock.
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn add_record(&mut self, record: Record) {
        debug!(
            amount = record.amount(),
            date = record.date(),
            "adding record `{}`",
            record.comment()
        );
        self.records.push(record);
    }

    /// Sum of amounts recorded for today.
    pub fn get_today_stats(&self) -> f64 {
        let today = format_date(self.clock.today());
        let total = self
            .records
            .iter()
            .filter(|record| record.date() == today)
            .map(Record::amount)
            .sum();
        debug!(%today, total, "computed today stats");
        total
    }

    /// Sum of amounts dated after `today - 7 days`.
    ///
    /// Fails on the first record whose date does not parse.
    pub fn get_week_stats(&self) -> Result<f64, CalculatorError> {
        let week_ago = self.clock.today() - Duration::days(WEEK_DAYS);
        let mut total = 0.0;
        for record in &self.records {
            let date = record.parse_date().map_err(|err| {
                warn!("cannot include record `{}` in week stats: {}", record.comment(), err);
                err
            })?;
            if date > week_ago {
                total += record.amount();
            }
        }
        debug!(%week_ago, total, "computed week stats");
        Ok(total)
    }

    /// `limit - today`; negative when today's total exceeds the limit.
    pub fn get_remaining_value(&self) -> f64 {
        self.limit - self.get_today_stats()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

/// Base contract shared by the specialised calculators.
///
/// Implementors only expose their inner [`Calculator`]; the aggregation
/// operations come for free.
pub trait LimitTracker {
    fn calculator(&self) -> &Calculator;

    fn calculator_mut(&mut self) -> &mut Calculator;

    fn add_record(&mut self, record: Record) {
        self.calculator_mut().add_record(record);
    }

    fn get_today_stats(&self) -> f64 {
        self.calculator().get_today_stats()
    }

    fn get_week_stats(&self) -> Result<f64, CalculatorError> {
        self.calculator().get_week_stats()
    }

    fn get_remaining_value(&self) -> f64 {
        self.calculator().get_remaining_value()
    }
}

impl LimitTracker for Calculator {
    fn calculator(&self) -> &Calculator {
        self
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        self
    }
}
