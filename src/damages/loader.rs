//! Load claims from CSV batches and damage parameters from JSON

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer};
use log::info;
use serde::{Deserialize, Serialize};

use super::aggregator::{assess_damages, DamageBreakdown};
use super::params::DamageParams;
use crate::discount::DEFAULT_ANNUAL_RATE;
use crate::error::{DamagesError, Result};

/// Default location of the claims batch
pub const DEFAULT_CLAIMS_PATH: &str = "data/claims.csv";

/// A claim identifier with its damage parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub params: DamageParams,
}

/// Assessment result for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub claim_id: String,
    pub breakdown: DamageBreakdown,
}

impl Claim {
    pub fn assess(&self) -> ClaimOutcome {
        ClaimOutcome {
            claim_id: self.claim_id.clone(),
            breakdown: assess_damages(self.params),
        }
    }
}

/// Assess a batch of claims in order
pub fn assess_claims(claims: &[Claim]) -> Vec<ClaimOutcome> {
    claims.iter().map(Claim::assess).collect()
}

/// Raw CSV row; empty optional cells fall back to the parameter defaults
#[derive(Debug, Deserialize)]
struct CsvRow {
    claim_id: String,
    monthly_income: f64,
    months: u32,
    disability_rate: f64,
    #[serde(default)]
    prior_disability_rate: Option<f64>,
    #[serde(default)]
    past_medical: Option<f64>,
    #[serde(default)]
    future_medical: Option<f64>,
    #[serde(default)]
    pain_compensation: Option<f64>,
    #[serde(default)]
    liability_ratio: Option<f64>,
    #[serde(default)]
    discount_rate: Option<f64>,
}

impl CsvRow {
    fn into_claim(self, line: u64, default_discount_rate: f64) -> Result<Claim> {
        let claim_id = self.claim_id.trim().to_string();
        if claim_id.is_empty() {
            return Err(DamagesError::InvalidClaim {
                line,
                message: "missing claim_id".to_string(),
            });
        }

        let mut params = DamageParams::new(self.monthly_income, self.months, self.disability_rate)
            .with_discount_rate(default_discount_rate);
        if let Some(rate) = self.prior_disability_rate {
            params = params.with_prior_disability_rate(rate);
        }
        if let Some(amount) = self.past_medical {
            params = params.with_past_medical(amount);
        }
        if let Some(amount) = self.future_medical {
            params = params.with_future_medical(amount);
        }
        if let Some(amount) = self.pain_compensation {
            params = params.with_pain_compensation(amount);
        }
        if let Some(ratio) = self.liability_ratio {
            params = params.with_liability_ratio(ratio);
        }
        if let Some(rate) = self.discount_rate {
            params = params.with_discount_rate(rate);
        }

        let amounts = [
            params.monthly_income,
            params.disability_rate,
            params.prior_disability_rate,
            params.past_medical,
            params.future_medical,
            params.pain_compensation,
            params.liability_ratio,
            params.discount_rate,
        ];
        if amounts.iter().any(|v| !v.is_finite()) {
            return Err(DamagesError::InvalidClaim {
                line,
                message: format!("non-finite amount in claim {}", claim_id),
            });
        }

        Ok(Claim { claim_id, params })
    }
}

/// Flattened outcome row for CSV output
#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    claim_id: &'a str,
    net_disability: f64,
    monthly_loss: f64,
    lost_income: f64,
    past_medical: f64,
    future_medical: f64,
    pain_compensation: f64,
    total_before_liability: f64,
    liability_ratio: f64,
    award: f64,
}

impl<'a> From<&'a ClaimOutcome> for OutcomeRow<'a> {
    fn from(outcome: &'a ClaimOutcome) -> Self {
        let b = &outcome.breakdown;
        Self {
            claim_id: &outcome.claim_id,
            net_disability: b.net_disability,
            monthly_loss: b.monthly_loss,
            lost_income: b.lost_income,
            past_medical: b.past_medical,
            future_medical: b.future_medical,
            pain_compensation: b.pain_compensation,
            total_before_liability: b.total_before_liability,
            liability_ratio: b.liability_ratio,
            award: b.award,
        }
    }
}

/// Load all claims from a CSV file
pub fn load_claims<P: AsRef<Path>>(path: P) -> Result<Vec<Claim>> {
    let file = File::open(path.as_ref())?;
    let claims = load_claims_from_reader(file)?;
    info!("Loaded {} claims from {}", claims.len(), path.as_ref().display());
    Ok(claims)
}

/// Load claims from any reader (e.g., string buffer, request body)
pub fn load_claims_from_reader<R: Read>(reader: R) -> Result<Vec<Claim>> {
    load_claims_with_rate(reader, DEFAULT_ANNUAL_RATE)
}

/// Load claims, using `default_discount_rate` where a row leaves the rate empty
pub fn load_claims_with_rate<R: Read>(reader: R, default_discount_rate: f64) -> Result<Vec<Claim>> {
    let mut csv_reader = Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut claims = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers))?;
        claims.push(row.into_claim(line, default_discount_rate)?);
    }

    Ok(claims)
}

/// Write one CSV row per outcome
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[ClaimOutcome]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(OutcomeRow::from(outcome))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Parse damage parameters from a JSON document
pub fn params_from_json_str(json: &str) -> Result<DamageParams> {
    Ok(serde_json::from_str(json)?)
}

/// Load damage parameters from a JSON file
pub fn load_params_json<P: AsRef<Path>>(path: P) -> Result<DamageParams> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}
