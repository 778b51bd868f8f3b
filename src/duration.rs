//! Whole-month compensation periods from calendar dates
//!
//! The discount engine only accepts whole months, so any fractional period
//! (e.g. valuation date to retirement) is rounded here under an explicit policy.

use chrono::{Datelike, Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a fractional trailing month is rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum RoundingPolicy {
    /// Drop the partial month
    #[default]
    Floor,
    /// Count the partial month if at least half of it elapsed
    Nearest,
    /// Count any partial month
    Ceil,
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

/// Months from `from` to `to` as (whole months, fraction of the following month)
pub fn month_span(from: NaiveDate, to: NaiveDate) -> (u32, f64) {
    if to <= from {
        return (0, 0.0);
    }

    let estimate = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut whole = estimate.max(0) as u32;
    if add_months(from, whole) > to {
        whole -= 1;
    }

    let anchor = add_months(from, whole);
    let next = add_months(from, whole + 1);
    let month_days = (next - anchor).num_days();
    let fraction = if month_days > 0 {
        (to - anchor).num_days() as f64 / month_days as f64
    } else {
        0.0
    };

    (whole, fraction)
}

/// Compensated months between two dates, rounded per `policy`
///
/// Returns 0 when `to` is not after `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate, policy: RoundingPolicy) -> u32 {
    let (whole, fraction) = month_span(from, to);
    let extra = match policy {
        RoundingPolicy::Floor => false,
        RoundingPolicy::Nearest => fraction >= 0.5,
        RoundingPolicy::Ceil => fraction > 0.0,
    };
    whole + extra as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_years() {
        let months = months_between(date(2024, 1, 15), date(2044, 1, 15), RoundingPolicy::Floor);
        assert_eq!(months, 240);
    }

    #[test]
    fn test_partial_month_rounding() {
        // Feb 15 to Mar 1, 2024 is 15 of 29 days
        let from = date(2024, 1, 15);
        let to = date(2024, 3, 1);

        let (whole, fraction) = month_span(from, to);
        assert_eq!(whole, 1);
        assert!((fraction - 15.0 / 29.0).abs() < 1e-12);

        assert_eq!(months_between(from, to, RoundingPolicy::Floor), 1);
        assert_eq!(months_between(from, to, RoundingPolicy::Nearest), 2);
        assert_eq!(months_between(from, to, RoundingPolicy::Ceil), 2);
    }

    #[test]
    fn test_short_partial_month() {
        let from = date(2024, 5, 10);
        let to = date(2024, 7, 12);
        assert_eq!(months_between(from, to, RoundingPolicy::Nearest), 2);
        assert_eq!(months_between(from, to, RoundingPolicy::Ceil), 3);
    }

    #[test]
    fn test_month_end_clamps() {
        // Jan 31 plus one month lands on Feb 29 in a leap year
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 29), RoundingPolicy::Floor), 1);
    }

    #[test]
    fn test_reversed_dates_are_zero() {
        assert_eq!(months_between(date(2030, 1, 1), date(2024, 1, 1), RoundingPolicy::Ceil), 0);
        assert_eq!(months_between(date(2030, 1, 1), date(2030, 1, 1), RoundingPolicy::Ceil), 0);
    }
}
