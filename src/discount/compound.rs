//! Compound monthly discounting, kept for comparison against Hoffmann figures
//!
//! Awards are never computed with this convention. It exists so reports can
//! show how much the simple-interest method adds over compound discounting.

/// PV of a level stream paid at the end of each month, discounted by `(1 + r/12)^m`
pub fn compound_present_value(monthly_amount: f64, months: u32, annual_rate: f64) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate.abs() < 1e-10 {
        return monthly_amount * months as f64;
    }

    let v = 1.0 / (1.0 + monthly_rate);
    monthly_amount * v * (1.0 - v.powi(months as i32)) / (1.0 - v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::hoffmann_present_value;

    #[test]
    fn test_compound_annuity() {
        // $100/month for 12 months at 6% annual
        // Expected: 100 * (1 - 1.005^-12) / 0.005 ≈ 1161.89
        let pv = compound_present_value(100.0, 12, 0.06);
        assert!((pv - 1161.89).abs() < 0.01, "got {}", pv);
    }

    #[test]
    fn test_zero_rate() {
        assert!((compound_present_value(100.0, 12, 0.0) - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_hoffmann_exceeds_compound() {
        // Linear denominators grow more slowly than compound ones
        for months in [2, 12, 120, 240, 480] {
            let simple = hoffmann_present_value(1000.0, months, 0.05);
            let compound = compound_present_value(1000.0, months, 0.05);
            assert!(simple > compound, "months={} simple={} compound={}", months, simple, compound);
        }
    }

    #[test]
    fn test_single_month_agrees() {
        let simple = hoffmann_present_value(1000.0, 1, 0.05);
        let compound = compound_present_value(1000.0, 1, 0.05);
        assert!((simple - compound).abs() < 1e-9);
    }
}
