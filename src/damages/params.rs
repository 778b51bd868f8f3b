//! Damage parameters for a single claim

use serde::{Deserialize, Serialize};

use crate::discount::DEFAULT_ANNUAL_RATE;

fn default_liability_ratio() -> f64 {
    1.0
}

fn default_discount_rate() -> f64 {
    DEFAULT_ANNUAL_RATE
}

/// Inputs to a damages assessment
///
/// Built once by the caller and consumed by value; nothing mutates it after
/// construction. Fields other than income, months and disability rate have
/// documented defaults, applied both by [`DamageParams::new`] and when
/// deserializing a document that omits them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageParams {
    /// Gross monthly earning capacity before the injury
    pub monthly_income: f64,

    /// Future months compensated. Fractional durations are rounded by the
    /// caller (see [`crate::duration::months_between`]).
    pub months: u32,

    /// Post-injury disability fraction, 0 to 1
    pub disability_rate: f64,

    /// Pre-existing disability fraction, subtracted from `disability_rate`
    #[serde(default)]
    pub prior_disability_rate: f64,

    /// Medical costs already incurred (undiscounted)
    #[serde(default)]
    pub past_medical: f64,

    /// Anticipated medical costs (undiscounted)
    #[serde(default)]
    pub future_medical: f64,

    /// Non-economic damages (undiscounted)
    #[serde(default)]
    pub pain_compensation: f64,

    /// Share of the total chargeable to the liable party
    #[serde(default = "default_liability_ratio")]
    pub liability_ratio: f64,

    /// Nominal annual rate used for Hoffmann discounting
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

impl DamageParams {
    /// Create parameters with every optional head at its default
    pub fn new(monthly_income: f64, months: u32, disability_rate: f64) -> Self {
        Self {
            monthly_income,
            months,
            disability_rate,
            prior_disability_rate: 0.0,
            past_medical: 0.0,
            future_medical: 0.0,
            pain_compensation: 0.0,
            liability_ratio: default_liability_ratio(),
            discount_rate: default_discount_rate(),
        }
    }

    pub fn with_prior_disability_rate(mut self, rate: f64) -> Self {
        self.prior_disability_rate = rate;
        self
    }

    pub fn with_past_medical(mut self, amount: f64) -> Self {
        self.past_medical = amount;
        self
    }

    pub fn with_future_medical(mut self, amount: f64) -> Self {
        self.future_medical = amount;
        self
    }

    pub fn with_pain_compensation(mut self, amount: f64) -> Self {
        self.pain_compensation = amount;
        self
    }

    pub fn with_liability_ratio(mut self, ratio: f64) -> Self {
        self.liability_ratio = ratio;
        self
    }

    pub fn with_discount_rate(mut self, annual_rate: f64) -> Self {
        self.discount_rate = annual_rate;
        self
    }

    /// Disability attributable to the injury, floored at zero
    pub fn net_disability(&self) -> f64 {
        (self.disability_rate - self.prior_disability_rate).max(0.0)
    }

    /// Names of fields outside their documented ranges
    ///
    /// Informational only: the calculation evaluates the formula as given.
    pub fn out_of_range_fields(&self) -> Vec<&'static str> {
        let unit = |v: f64| (0.0..=1.0).contains(&v);
        let non_negative = |v: f64| v >= 0.0;

        let checks = [
            ("monthly_income", non_negative(self.monthly_income)),
            ("disability_rate", unit(self.disability_rate)),
            ("prior_disability_rate", unit(self.prior_disability_rate)),
            ("past_medical", non_negative(self.past_medical)),
            ("future_medical", non_negative(self.future_medical)),
            ("pain_compensation", non_negative(self.pain_compensation)),
            ("liability_ratio", unit(self.liability_ratio)),
            ("discount_rate", non_negative(self.discount_rate)),
        ];

        checks
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect()
    }
}
