//! Runtime plumbing shared by the calculators.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
