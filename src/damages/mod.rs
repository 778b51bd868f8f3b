//! Damage aggregation for personal-injury claims
//!
//! Heads of damage:
//! - **Lost income**: disability-adjusted monthly income, Hoffmann-discounted
//! - **Past medical**: costs already incurred
//! - **Future medical**: anticipated costs, taken as a lump sum
//! - **Pain compensation**: non-economic damages
//!
//! Only lost income is discounted. The liability ratio is applied once, to
//! the sum of all heads.
//!
//! # Example
//!
//! ```
//! use damages_calculator::damages::{calculate_damages, DamageParams};
//!
//! let params = DamageParams::new(1000.0, 12, 0.5);
//! let award = calculate_damages(params);
//! assert!((award - 5842.93).abs() < 0.01);
//! ```

mod params;
mod aggregator;
pub mod loader;

pub use params::DamageParams;
pub use aggregator::{calculate_damages, assess_damages, DamageBreakdown};
pub use loader::{
    Claim,
    ClaimOutcome,
    assess_claims,
    load_claims,
    load_claims_from_reader,
    load_claims_with_rate,
    load_params_json,
    params_from_json_str,
    write_outcomes,
};
