//! End-to-end damages scenarios against reference figures

use approx::assert_relative_eq;
use damages_calculator::damages::{assess_claims, load_claims, load_params_json};
use damages_calculator::discount::{compound_present_value, HoffmannDiscount};
use damages_calculator::format::format_currency;
use damages_calculator::{assess_damages, calculate_damages, hoffmann_present_value, DamageParams};

fn reference_claim() -> DamageParams {
    DamageParams::new(2_000_000.0, 240, 0.85)
        .with_prior_disability_rate(0.24)
        .with_past_medical(408_939.0)
        .with_future_medical(0.0)
        .with_pain_compensation(10_000_000.0)
        .with_liability_ratio(0.8)
}

#[test]
fn reference_claim_award() {
    let award = calculate_damages(reference_claim());
    assert_relative_eq!(award, 170_446_200.94047663, max_relative = 1e-6);
    assert_eq!(format_currency(award, "KRW"), "170,446,201 KRW");
}

#[test]
fn reference_claim_lost_income() {
    let breakdown = assess_damages(reference_claim());
    assert_relative_eq!(breakdown.lost_income, 202_648_812.17559576, max_relative = 1e-9);
    assert_relative_eq!(
        breakdown.total_before_liability,
        202_648_812.17559576 + 408_939.0 + 10_000_000.0,
        max_relative = 1e-12
    );
}

#[test]
fn one_year_present_value() {
    assert_relative_eq!(hoffmann_present_value(1000.0, 12, 0.05), 11_685.862158178372, max_relative = 1e-12);
    assert_relative_eq!(
        calculate_damages(DamageParams::new(1000.0, 12, 0.5)),
        5_842.931079089186,
        max_relative = 1e-12
    );
}

#[test]
fn twenty_year_coefficient() {
    // Hoffmann coefficient for 240 months at 5%
    let factor = HoffmannDiscount::default().annuity_factor(240);
    assert_relative_eq!(factor, 166.10558375048845, max_relative = 1e-12);
}

#[test]
fn monotone_in_discount_rate() {
    let rates = [0.0, 0.01, 0.03, 0.05, 0.08, 0.12];
    let values: Vec<f64> = rates
        .iter()
        .map(|&r| hoffmann_present_value(1_500_000.0, 360, r))
        .collect();
    for pair in values.windows(2) {
        assert!(pair[1] < pair[0]);
    }
    assert_relative_eq!(values[0], 1_500_000.0 * 360.0);
}

#[test]
fn simple_interest_is_not_compound() {
    let simple = hoffmann_present_value(1_220_000.0, 240, 0.05);
    let compound = compound_present_value(1_220_000.0, 240, 0.05);
    // Compound discounting would understate the award by more than 5% here
    assert!(simple > compound * 1.05, "simple={} compound={}", simple, compound);
}

#[test]
fn liability_scales_linearly() {
    let full = calculate_damages(reference_claim().with_liability_ratio(1.0));
    for k in [0.1, 0.5, 0.75, 0.8] {
        let scaled = calculate_damages(reference_claim().with_liability_ratio(k));
        assert_relative_eq!(scaled, k * full, max_relative = 1e-12);
    }
}

#[test]
fn sample_batch_matches_direct_calculation() {
    let claims = load_claims("data/claims.csv").expect("Failed to load sample claims");
    assert_eq!(claims.len(), 5);

    let outcomes = assess_claims(&claims);
    for (claim, outcome) in claims.iter().zip(&outcomes) {
        assert_eq!(claim.claim_id, outcome.claim_id);
        assert_eq!(outcome.breakdown.award, calculate_damages(claim.params));
    }

    assert_relative_eq!(outcomes[0].breakdown.award, 170_446_200.94047663, max_relative = 1e-6);
    assert_relative_eq!(outcomes[1].breakdown.award, 5_842.931079089186, max_relative = 1e-12);

    // C-0004: prior disability exceeds current, so only the fixed heads remain
    assert_eq!(outcomes[3].breakdown.lost_income, 0.0);
    assert_relative_eq!(outcomes[3].breakdown.award, 5_820_000.0);

    assert_eq!(claims[4].params.discount_rate, 0.04);
}

#[test]
fn json_example_matches_reference() {
    let params = load_params_json("data/claim_example.json").expect("Failed to load example");
    assert_eq!(params, reference_claim());
}
