//! Checking whether a civil date-time falls within trading hours.
//!
//! Times are civil (wall-clock) values without a time zone.

use jiff::civil::DateTime;
use splice_core::compose;

use crate::{Error, TradingHours};

/// Returns the hour of the day, `0..=23`.
#[must_use]
pub fn hour_of(at: DateTime) -> i8 {
    at.hour()
}

/// Returns a pipeline that reports whether the market is open at a given time.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use splice_playground::{TradingHours, clock::market_open_check};
///
/// let is_open = market_open_check(TradingHours::default());
///
/// assert!(is_open(date(2024, 3, 4).at(10, 30, 0, 0)));
/// assert!(!is_open(date(2024, 3, 4).at(18, 0, 0, 0)));
/// ```
pub fn market_open_check(hours: TradingHours) -> impl Fn(DateTime) -> bool {
    compose(hour_of, move |hour| hours.contains(hour))
}

/// Parses a civil date-time such as `2024-03-04T10:30`.
///
/// # Errors
///
/// Returns [`Error::InvalidTime`] if `input` is not a valid civil date-time.
pub fn parse_civil(input: &str) -> Result<DateTime, Error> {
    input.parse().map_err(|source| Error::InvalidTime {
        input: input.to_string(),
        source,
    })
}
