//! Assess a single claim from the command line
//!
//! Usage:
//!   cargo run --bin assess_claim -- --monthly-income 2000000 --months 240 --disability-rate 0.85
//!   cargo run --bin assess_claim -- --params claim.json --json
//!
//! Months can be derived from dates with --valuation-date and --retirement-date.
//! DISCOUNT_RATE and CURRENCY_UNIT set the defaults for --discount-rate and --currency.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use damages_calculator::{
    assess_damages,
    config::CalculatorConfig,
    damages::load_params_json,
    discount::{compound_present_value, HoffmannDiscount},
    duration::{months_between, RoundingPolicy},
    format::format_currency,
    DamageBreakdown, DamageParams,
};
use serde::Serialize;
use std::path::PathBuf;

/// Personal-injury damages under Hoffmann discounting
#[derive(Parser, Debug)]
#[command(name = "assess_claim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with damage parameters (individual flags override its fields)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Gross monthly earning capacity before the injury
    #[arg(long)]
    monthly_income: Option<f64>,

    /// Compensated months
    #[arg(long, conflicts_with = "retirement_date")]
    months: Option<u32>,

    /// Post-injury disability fraction (0-1)
    #[arg(long)]
    disability_rate: Option<f64>,

    /// Pre-existing disability fraction (0-1)
    #[arg(long)]
    prior_disability_rate: Option<f64>,

    #[arg(long)]
    past_medical: Option<f64>,

    #[arg(long)]
    future_medical: Option<f64>,

    #[arg(long)]
    pain_compensation: Option<f64>,

    /// Share of the total chargeable to the liable party (0-1)
    #[arg(long)]
    liability_ratio: Option<f64>,

    /// Nominal annual discount rate
    #[arg(long)]
    discount_rate: Option<f64>,

    /// Date compensation is valued from (YYYY-MM-DD)
    #[arg(long, requires = "retirement_date")]
    valuation_date: Option<NaiveDate>,

    /// End of the compensated period (YYYY-MM-DD)
    #[arg(long)]
    retirement_date: Option<NaiveDate>,

    /// Rounding for a partial final month
    #[arg(long, value_enum, default_value_t = RoundingPolicy::Floor)]
    rounding: RoundingPolicy,

    /// Currency label for formatted amounts
    #[arg(long)]
    currency: Option<String>,

    /// Print the month-by-month discount schedule
    #[arg(long)]
    schedule: bool,

    /// Show the lost income under compound discounting for comparison
    #[arg(long)]
    compare_compound: bool,

    /// Emit JSON instead of a report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AssessmentResponse {
    params: DamageParams,
    breakdown: DamageBreakdown,
    formatted_award: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    compound_lost_income: Option<f64>,
}

fn build_params(cli: &Cli, config: &CalculatorConfig) -> Result<DamageParams> {
    let months_from_dates = match (cli.valuation_date, cli.retirement_date) {
        (Some(from), Some(to)) => Some(months_between(from, to, cli.rounding)),
        (None, Some(to)) => {
            let today = chrono::Local::now().date_naive();
            Some(months_between(today, to, cli.rounding))
        }
        _ => None,
    };

    let mut params = match &cli.params {
        Some(path) => load_params_json(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => {
            let (Some(income), Some(rate)) = (cli.monthly_income, cli.disability_rate) else {
                bail!("--monthly-income and --disability-rate are required without --params");
            };
            let Some(months) = cli.months.or(months_from_dates) else {
                bail!("either --months or --retirement-date is required without --params");
            };
            DamageParams::new(income, months, rate).with_discount_rate(config.default_discount_rate)
        }
    };

    if let Some(v) = cli.monthly_income {
        params.monthly_income = v;
    }
    if let Some(v) = cli.months.or(months_from_dates) {
        params.months = v;
    }
    if let Some(v) = cli.disability_rate {
        params.disability_rate = v;
    }
    if let Some(v) = cli.prior_disability_rate {
        params = params.with_prior_disability_rate(v);
    }
    if let Some(v) = cli.past_medical {
        params = params.with_past_medical(v);
    }
    if let Some(v) = cli.future_medical {
        params = params.with_future_medical(v);
    }
    if let Some(v) = cli.pain_compensation {
        params = params.with_pain_compensation(v);
    }
    if let Some(v) = cli.liability_ratio {
        params = params.with_liability_ratio(v);
    }
    if let Some(v) = cli.discount_rate {
        params = params.with_discount_rate(v);
    }

    Ok(params)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::from_env();
    let unit = cli.currency.clone().unwrap_or(config.currency_unit.clone());

    let params = build_params(&cli, &config)?;
    let breakdown = assess_damages(params);
    let compound_lost_income = cli.compare_compound.then(|| {
        compound_present_value(breakdown.monthly_loss, params.months, params.discount_rate)
    });

    if cli.json {
        let response = AssessmentResponse {
            params,
            breakdown,
            formatted_award: format_currency(breakdown.award, &unit),
            compound_lost_income,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Months compensated:  {}", params.months);
    println!("Net disability:      {:.4}", breakdown.net_disability);
    println!("Monthly loss:        {}", format_currency(breakdown.monthly_loss, &unit));
    println!("Lost income (PV):    {}", format_currency(breakdown.lost_income, &unit));
    println!("Past medical:        {}", format_currency(breakdown.past_medical, &unit));
    println!("Future medical:      {}", format_currency(breakdown.future_medical, &unit));
    println!("Pain compensation:   {}", format_currency(breakdown.pain_compensation, &unit));
    println!("Total:               {}", format_currency(breakdown.total_before_liability, &unit));
    println!("Liability ratio:     {:.2}%", breakdown.liability_ratio * 100.0);
    println!("{}", "-".repeat(48));
    println!("Estimated damages:   {}", format_currency(breakdown.award, &unit));

    if let Some(compound) = compound_lost_income {
        println!("\nCompound-discounted lost income: {}", format_currency(compound, &unit));
        println!("Hoffmann premium over compound:  {}",
            format_currency(breakdown.lost_income - compound, &unit));
    }

    if cli.schedule {
        let schedule = HoffmannDiscount::new(params.discount_rate)
            .schedule(breakdown.monthly_loss, params.months);

        println!("\n{:>5} {:>12} {:>16} {:>16} {:>18}",
            "Month", "Factor", "Nominal", "PV", "Cumulative PV");
        println!("{}", "-".repeat(71));
        for row in &schedule.rows {
            println!("{:>5} {:>12.8} {:>16.2} {:>16.2} {:>18.2}",
                row.month, row.discount_factor, row.nominal, row.present_value, row.cumulative_pv);
        }

        let summary = schedule.summary();
        println!("\nTotal nominal:  {}", format_currency(summary.total_nominal, &unit));
        println!("Total discount: {}", format_currency(summary.total_discount, &unit));
    }

    Ok(())
}
