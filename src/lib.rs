//! Damages Calculator - Personal-injury awards under Hoffmann discounting
//!
//! This library provides:
//! - Present value of monthly income streams with simple-interest (Hoffmann) discounting
//! - Aggregation of lost income, medical costs and pain compensation into an award
//! - Liability apportionment of the total
//! - Claim loading from CSV batches and JSON documents
//! - Month counting and currency formatting helpers for reports

pub mod config;
pub mod damages;
pub mod discount;
pub mod duration;
pub mod error;
pub mod format;

// Re-export commonly used types
pub use damages::{calculate_damages, assess_damages, DamageParams, DamageBreakdown, Claim, ClaimOutcome};
pub use discount::{hoffmann_present_value, HoffmannDiscount};
pub use error::{DamagesError, Result};
