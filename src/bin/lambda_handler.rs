//! AWS Lambda handler for damages assessments
//!
//! Accepts damage parameters as JSON and returns the award with its breakdown.
//! Omitted optional fields take their usual defaults.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use damages_calculator::{
    assess_damages,
    config::CalculatorConfig,
    format::format_currency,
    DamageBreakdown, DamageParams,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input for a single assessment
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    #[serde(flatten)]
    pub params: DamageParams,

    /// Currency label for the formatted award (default: CURRENCY_UNIT or KRW)
    #[serde(default)]
    pub currency: Option<String>,
}

/// Output from the assessment
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub award: f64,
    pub formatted_award: String,
    pub breakdown: DamageBreakdown,
    pub params: DamageParams,
    pub execution_time_us: u64,
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message });
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))?)
}

fn json_response(body: &AssessmentResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: AssessmentRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return error_response(400, &format!("Invalid JSON: {}", e));
        }
    };

    let config = CalculatorConfig::from_env();
    let unit = request.currency.unwrap_or(config.currency_unit);

    let breakdown = assess_damages(request.params);
    log::info!("Assessed claim: months={} award={:.2}", request.params.months, breakdown.award);

    let response = AssessmentResponse {
        award: breakdown.award,
        formatted_award: format_currency(breakdown.award, &unit),
        breakdown,
        params: request.params,
        execution_time_us: start.elapsed().as_micros() as u64,
    };

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
