//! Monthly discount schedule output

use serde::{Deserialize, Serialize};

/// A single month of a discounted payment stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountRow {
    /// Month index, starting at 1
    pub month: u32,
    pub discount_factor: f64,
    /// Undiscounted payment for the month
    pub nominal: f64,
    pub present_value: f64,
    /// Running present value through this month
    pub cumulative_pv: f64,
}

/// Complete month-by-month discounting of a level stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountSchedule {
    pub monthly_amount: f64,
    pub annual_rate: f64,
    pub rows: Vec<DiscountRow>,
}

impl DiscountSchedule {
    pub fn new(monthly_amount: f64, annual_rate: f64) -> Self {
        Self {
            monthly_amount,
            annual_rate,
            rows: Vec::new(),
        }
    }

    /// Add a discounted month
    pub fn add_row(&mut self, row: DiscountRow) {
        self.rows.push(row);
    }

    pub fn total_present_value(&self) -> f64 {
        self.rows.last().map(|r| r.cumulative_pv).unwrap_or(0.0)
    }

    pub fn total_nominal(&self) -> f64 {
        self.rows.iter().map(|r| r.nominal).sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_nominal = self.total_nominal();
        let total_present_value = self.total_present_value();
        let final_discount_factor = self.rows.last().map(|r| r.discount_factor).unwrap_or(1.0);

        ScheduleSummary {
            total_months: self.rows.len() as u32,
            total_nominal,
            total_present_value,
            total_discount: total_nominal - total_present_value,
            final_discount_factor,
        }
    }
}

/// Summary statistics for a discount schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_nominal: f64,
    pub total_present_value: f64,
    /// Amount removed by discounting
    pub total_discount: f64,
    pub final_discount_factor: f64,
}
