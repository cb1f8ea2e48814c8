//! Core building blocks shared by the parser and the CLI.
//!
//! This module provides the date engine and the reference clock.

mod clock;
mod datetime;

pub use clock::{Clock, FixedClock, SystemClock};
#[cfg(test)]
pub use clock::MockClock;
pub use datetime::{parse_natural_date, scan_dates, DateEngineError, DateMatch};
