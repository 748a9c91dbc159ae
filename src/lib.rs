#![doc(test(attr(deny(warnings))))]

//! Daily Limits keeps dated money and calorie entries against a daily limit.
//!
//! [`ledger::Calculator`] sums today's and the trailing week's entries;
//! [`ledger::CashCalculator`] and [`ledger::CaloriesCalculator`] turn the
//! remainder into messages, converting money through [`currency::RateTable`].
//! "Today" always comes from an injected [`core::Clock`].

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the log subscriber once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "daily limits ready");
    });
}
