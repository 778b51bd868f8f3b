//! Hoffmann simple-interest discounting
//!
//! The discount factor for month `m` is `1 / (1 + r/12 * m)`: interest accrues
//! linearly in the denominator and never compounds. Courts applying the
//! Hoffmann convention expect exactly this form, so the compound factor
//! `(1 + r/12)^-m` must not be substituted here.

use serde::{Deserialize, Serialize};

use super::schedule::{DiscountRow, DiscountSchedule};
use crate::error::{DamagesError, Result};

/// Default nominal annual discount rate (5%)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.05;

/// Present value of `months` level monthly payments under Hoffmann discounting.
///
/// Terms are accumulated from month 1 upward; the order is observable at
/// floating-point rounding granularity and matches the reference figures.
/// `months == 0` returns 0 without iterating.
pub fn hoffmann_present_value(monthly_amount: f64, months: u32, annual_rate: f64) -> f64 {
    let rate_per_month = annual_rate / 12.0;
    let mut pv = 0.0;
    for m in 1..=months {
        pv += monthly_amount / (1.0 + rate_per_month * m as f64);
    }
    pv
}

/// Checked variant of [`hoffmann_present_value`]
///
/// Fails with [`DamagesError::InvalidDiscountRate`] when an input is not
/// finite or when some month's denominator is exactly zero.
pub fn try_hoffmann_present_value(monthly_amount: f64, months: u32, annual_rate: f64) -> Result<f64> {
    if !annual_rate.is_finite() || !monthly_amount.is_finite() {
        return Err(DamagesError::InvalidDiscountRate { annual_rate, month: 0 });
    }

    let rate_per_month = annual_rate / 12.0;
    let mut pv = 0.0;
    for m in 1..=months {
        let denominator = 1.0 + rate_per_month * m as f64;
        if denominator == 0.0 {
            return Err(DamagesError::InvalidDiscountRate { annual_rate, month: m });
        }
        pv += monthly_amount / denominator;
    }
    Ok(pv)
}

/// Hoffmann discounting at a fixed nominal annual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoffmannDiscount {
    /// Nominal annual rate (e.g. 0.05 for 5%)
    pub annual_rate: f64,
}

impl HoffmannDiscount {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Simple interest earned per month
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Discount factor applied to a payment received at the end of `month`
    pub fn discount_factor(&self, month: u32) -> f64 {
        1.0 / (1.0 + self.monthly_rate() * month as f64)
    }

    /// Present value of a level monthly stream
    pub fn present_value(&self, monthly_amount: f64, months: u32) -> f64 {
        hoffmann_present_value(monthly_amount, months, self.annual_rate)
    }

    /// Present value of 1 per month for `months` months (the Hoffmann coefficient)
    pub fn annuity_factor(&self, months: u32) -> f64 {
        self.present_value(1.0, months)
    }

    /// Month-by-month breakdown of [`present_value`](Self::present_value)
    pub fn schedule(&self, monthly_amount: f64, months: u32) -> DiscountSchedule {
        let rate_per_month = self.monthly_rate();
        let mut schedule = DiscountSchedule::new(monthly_amount, self.annual_rate);
        let mut cumulative_pv = 0.0;

        for m in 1..=months {
            let denominator = 1.0 + rate_per_month * m as f64;
            // Same division as the summation so the running total matches it exactly
            let present_value = monthly_amount / denominator;
            cumulative_pv += present_value;

            schedule.add_row(DiscountRow {
                month: m,
                discount_factor: 1.0 / denominator,
                nominal: monthly_amount,
                present_value,
                cumulative_pv,
            });
        }

        schedule
    }
}

impl Default for HoffmannDiscount {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_months_is_zero() {
        assert_eq!(hoffmann_present_value(1000.0, 0, 0.05), 0.0);
        assert_eq!(hoffmann_present_value(-250.0, 0, 0.12), 0.0);
    }

    #[test]
    fn test_zero_payment_is_zero() {
        assert_eq!(hoffmann_present_value(0.0, 240, 0.05), 0.0);
    }

    #[test]
    fn test_zero_rate_is_undiscounted() {
        let pv = hoffmann_present_value(1000.0, 12, 0.0);
        assert!((pv - 12_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_year_at_five_percent() {
        // 1000 / (1 + 0.05/12 * m) for m = 1..12
        let pv = hoffmann_present_value(1000.0, 12, 0.05);
        assert!((pv - 11_685.862158178372).abs() < 1e-6, "got {}", pv);
    }

    #[test]
    fn test_negative_amount_is_arithmetic() {
        let pv = hoffmann_present_value(-1000.0, 12, 0.05);
        assert!((pv + 11_685.862158178372).abs() < 1e-6);
    }

    #[test]
    fn test_higher_rate_lowers_value() {
        let low = hoffmann_present_value(1000.0, 120, 0.03);
        let mid = hoffmann_present_value(1000.0, 120, 0.05);
        let high = hoffmann_present_value(1000.0, 120, 0.08);
        assert!(low > mid);
        assert!(mid > high);
    }

    #[test]
    fn test_discount_factor() {
        let discount = HoffmannDiscount::new(0.06);
        assert!((discount.monthly_rate() - 0.005).abs() < 1e-15);
        // Linear, not compound: 1 / (1 + 0.005 * 12) = 1 / 1.06
        assert!((discount.discount_factor(12) - 1.0 / 1.06).abs() < 1e-12);
        assert_eq!(discount.discount_factor(0), 1.0);
    }

    #[test]
    fn test_annuity_factor_scales() {
        let discount = HoffmannDiscount::default();
        let factor = discount.annuity_factor(240);
        let pv = discount.present_value(2_500.0, 240);
        assert!((factor * 2_500.0 - pv).abs() < 1e-6);
    }

    #[test]
    fn test_schedule_matches_sum() {
        let discount = HoffmannDiscount::new(0.05);
        let schedule = discount.schedule(1_220_000.0, 240);

        assert_eq!(schedule.rows.len(), 240);
        assert_eq!(schedule.rows[0].month, 1);
        assert_eq!(schedule.rows[239].month, 240);
        assert_eq!(
            schedule.total_present_value(),
            hoffmann_present_value(1_220_000.0, 240, 0.05)
        );
    }

    #[test]
    fn test_checked_variant_agrees() {
        let checked = try_hoffmann_present_value(1000.0, 12, 0.05).unwrap();
        assert_eq!(checked, hoffmann_present_value(1000.0, 12, 0.05));
    }

    #[test]
    fn test_checked_variant_rejects_vanishing_denominator() {
        // r/12 = -0.25 makes month 4's denominator exactly zero
        let err = try_hoffmann_present_value(1000.0, 12, -3.0).unwrap_err();
        match err {
            DamagesError::InvalidDiscountRate { month, .. } => assert_eq!(month, 4),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_checked_variant_rejects_nan() {
        assert!(try_hoffmann_present_value(1000.0, 12, f64::NAN).is_err());
        assert!(try_hoffmann_present_value(f64::INFINITY, 12, 0.05).is_err());
    }
}
