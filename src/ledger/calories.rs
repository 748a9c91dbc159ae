use std::sync::Arc;

use crate::{core::Clock, currency::format_amount};

use super::calculator::{Calculator, LimitTracker};

pub const NO_CALORIES_RESPONSE: &str = "Stop eating!";

/// Daily calorie budget tracker.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
        }
    }

    /// Describes how many calories are still allowed today.
    pub fn get_calories_remained(&self) -> String {
        let remaining = self.get_remaining_value();
        if remaining > 0.0 {
            remain_calories_response(remaining)
        } else {
            NO_CALORIES_RESPONSE.to_string()
        }
    }
}

fn remain_calories_response(calories: f64) -> String {
    format!(
        "You may still eat something today, but total calories should not exceed {} kCal",
        format_amount(calories)
    )
}

impl LimitTracker for CaloriesCalculator {
    fn calculator(&self) -> &Calculator {
        &self.inner
    }

    fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.inner
    }
}
