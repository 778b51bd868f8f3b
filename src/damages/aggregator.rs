//! Aggregation of damage heads into a final award

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::params::DamageParams;
use crate::discount::hoffmann_present_value;

/// Every intermediate of a damages assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Disability rate after removing the pre-existing share
    pub net_disability: f64,
    /// Monthly earning capacity lost (income * net disability)
    pub monthly_loss: f64,

    // Heads of damage
    pub lost_income: f64,
    pub past_medical: f64,
    pub future_medical: f64,
    pub pain_compensation: f64,

    pub total_before_liability: f64,
    pub liability_ratio: f64,
    /// Amount payable by the liable party
    pub award: f64,
}

impl DamageBreakdown {
    /// Share of the total borne by the claimant
    pub fn claimant_share(&self) -> f64 {
        self.total_before_liability - self.award
    }
}

/// Compute the award for a claim.
///
/// Lost income is the Hoffmann present value of the disability-adjusted
/// monthly income. Medical costs and pain compensation are added
/// undiscounted, and the liability ratio scales the grand total.
pub fn calculate_damages(params: DamageParams) -> f64 {
    assess_damages(params).award
}

/// Compute the award together with the intermediate amounts
pub fn assess_damages(params: DamageParams) -> DamageBreakdown {
    let out_of_range = params.out_of_range_fields();
    if !out_of_range.is_empty() {
        warn!("Damage parameters outside documented ranges: {}", out_of_range.join(", "));
    }

    let net_disability = params.net_disability();
    let monthly_loss = params.monthly_income * net_disability;
    let lost_income = hoffmann_present_value(monthly_loss, params.months, params.discount_rate);

    let total_before_liability =
        lost_income + params.past_medical + params.future_medical + params.pain_compensation;
    let award = total_before_liability * params.liability_ratio;

    debug!(
        "Assessed damages: months={} net_disability={:.4} lost_income={:.2} total={:.2} award={:.2}",
        params.months, net_disability, lost_income, total_before_liability, award
    );

    DamageBreakdown {
        net_disability,
        monthly_loss,
        lost_income,
        past_medical: params.past_medical,
        future_medical: params.future_medical,
        pain_compensation: params.pain_compensation,
        total_before_liability,
        liability_ratio: params.liability_ratio,
        award,
    }
}
