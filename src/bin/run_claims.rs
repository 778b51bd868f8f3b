//! Assess every claim in a CSV batch
//!
//! Accepts config via environment variables:
//!   CLAIMS_PATH    input CSV (default data/claims.csv)
//!   OUTPUT_PATH    output CSV (default claims_output.csv)
//!   DISCOUNT_RATE, CURRENCY_UNIT as for the other binaries
//! Pass --json to print the outcomes as JSON instead of writing CSV.

use anyhow::{Context, Result};
use damages_calculator::{
    config::CalculatorConfig,
    damages::{load_claims_with_rate, loader::DEFAULT_CLAIMS_PATH, write_outcomes},
    format::format_currency,
    Claim, ClaimOutcome,
};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs::File;
use std::time::Instant;

#[derive(Serialize)]
struct BatchResponse<'a> {
    claim_count: usize,
    total_award: f64,
    total_lost_income: f64,
    outcomes: &'a [ClaimOutcome],
    execution_time_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();
    let config = CalculatorConfig::from_env();

    let claims_path = env::var("CLAIMS_PATH").unwrap_or_else(|_| DEFAULT_CLAIMS_PATH.to_string());
    let output_path = env::var("OUTPUT_PATH").unwrap_or_else(|_| "claims_output.csv".to_string());

    let file = File::open(&claims_path)
        .with_context(|| format!("Failed to open claims file {}", claims_path))?;
    let claims = load_claims_with_rate(file, config.default_discount_rate)
        .with_context(|| format!("Failed to load claims from {}", claims_path))?;

    if !json_output {
        println!("Loaded {} claims from {} in {:?}", claims.len(), claims_path, start.elapsed());
    }

    // Claims share nothing, so assess them in parallel
    let outcomes: Vec<ClaimOutcome> = claims.par_iter().map(Claim::assess).collect();

    let total_award: f64 = outcomes.iter().map(|o| o.breakdown.award).sum();
    let total_lost_income: f64 = outcomes.iter().map(|o| o.breakdown.lost_income).sum();

    if json_output {
        let response = BatchResponse {
            claim_count: outcomes.len(),
            total_award,
            total_lost_income,
            outcomes: &outcomes,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let output = File::create(&output_path)
        .with_context(|| format!("Failed to create output file {}", output_path))?;
    write_outcomes(output, &outcomes)?;
    println!("Output written to {}", output_path);

    let unit = config.currency_unit.as_str();
    println!("\nBatch Summary:");
    println!("  Claims:            {}", outcomes.len());
    println!("  Total lost income: {}", format_currency(total_lost_income, unit));
    println!("  Total awards:      {}", format_currency(total_award, unit));
    if let Some(largest) = outcomes
        .iter()
        .max_by(|a, b| a.breakdown.award.total_cmp(&b.breakdown.award))
    {
        println!("  Largest award:     {} ({})",
            format_currency(largest.breakdown.award, unit), largest.claim_id);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
