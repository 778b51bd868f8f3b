//! Discount engine for monthly payment streams
//!
//! Supports:
//! - Hoffmann simple-interest discounting (used for awards)
//! - Month-by-month schedules for auditing a computed present value
//! - Compound discounting, for comparison only

mod hoffmann;
mod schedule;
mod compound;

pub use hoffmann::{
    hoffmann_present_value,
    try_hoffmann_present_value,
    HoffmannDiscount,
    DEFAULT_ANNUAL_RATE,
};
pub use schedule::{DiscountRow, DiscountSchedule, ScheduleSummary};
pub use compound::compound_present_value;
