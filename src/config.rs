//! Calculator defaults read from the environment
//!
//! Recognised variables:
//!   DISCOUNT_RATE   nominal annual rate used when a claim does not set one
//!   CURRENCY_UNIT   label appended to formatted awards

use std::env;

use crate::discount::DEFAULT_ANNUAL_RATE;

pub const DEFAULT_CURRENCY_UNIT: &str = "KRW";

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub default_discount_rate: f64,
    pub currency_unit: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_discount_rate: DEFAULT_ANNUAL_RATE,
            currency_unit: DEFAULT_CURRENCY_UNIT.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Read config from environment or use defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (environment, request headers, tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_discount_rate: f64 = lookup("DISCOUNT_RATE")
            .and_then(|s| s.trim().parse().ok())
            .filter(|r: &f64| r.is_finite())
            .unwrap_or(defaults.default_discount_rate);

        let currency_unit = lookup("CURRENCY_UNIT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.currency_unit);

        Self {
            default_discount_rate,
            currency_unit,
        }
    }
}
