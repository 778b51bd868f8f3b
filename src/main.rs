//! Damages Calculator demo
//!
//! Assesses a sample claim and prints the award with its breakdown

use damages_calculator::{
    assess_damages,
    config::CalculatorConfig,
    format::format_currency,
    DamageParams,
};

fn main() {
    env_logger::init();

    let config = CalculatorConfig::from_env();
    let unit = config.currency_unit.as_str();

    // Hypothetical claim: 20 years to retirement, 85% disabled with 24% pre-existing
    let params = DamageParams::new(
        2_000_000.0, // average monthly income
        240,         // months until retirement
        0.85,        // disability after the accident
    )
    .with_prior_disability_rate(0.24)
    .with_past_medical(408_939.0)
    .with_future_medical(0.0)
    .with_pain_compensation(10_000_000.0)
    .with_liability_ratio(0.8)
    .with_discount_rate(config.default_discount_rate);

    let breakdown = assess_damages(params);

    println!("Damages Calculator v0.1.0");
    println!("=========================\n");

    println!("Claim:");
    println!("  Monthly income:    {}", format_currency(params.monthly_income, unit));
    println!("  Months:            {}", params.months);
    println!("  Disability:        {:.2}% (prior {:.2}%)",
        params.disability_rate * 100.0, params.prior_disability_rate * 100.0);
    println!("  Liability ratio:   {:.2}%", params.liability_ratio * 100.0);
    println!("  Discount rate:     {:.2}%", params.discount_rate * 100.0);
    println!();

    println!("Heads of damage:");
    println!("  Lost income:       {}", format_currency(breakdown.lost_income, unit));
    println!("  Past medical:      {}", format_currency(breakdown.past_medical, unit));
    println!("  Future medical:    {}", format_currency(breakdown.future_medical, unit));
    println!("  Pain compensation: {}", format_currency(breakdown.pain_compensation, unit));
    println!("  Total:             {}", format_currency(breakdown.total_before_liability, unit));
    println!();

    println!("Estimated damages: {}", format_currency(breakdown.award, unit));
}
