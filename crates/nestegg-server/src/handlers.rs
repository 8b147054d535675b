//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use nestegg_analytics::{project_request, summarize};
use nestegg_core::{ProjectionRequest, ProjectionSummary, YearlyResult};
use nestegg_traits::{EtfAdvisor, EtfInformation};

use crate::error::ApiError;
use crate::params::{CalculationBody, CalculationQuery};

/// Application state.
pub struct AppState {
    /// ETF advisor, if one is configured
    pub advisor: Option<Arc<dyn EtfAdvisor>>,
    /// Longest horizon a request may ask for
    pub max_horizon_years: u32,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Welcome message with example requests.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the NestEgg compound interest API",
        "endpoints": {
            "calculation": "/calculation?initial_investment=1000&monthly_contribution=100&saving_years=10&interest_rate=8&compound_frequency=monthly",
            "calculation_summary": "/calculation/summary?initial_investment=1000&monthly_contribution=100&saving_years=10&interest_rate=8&compound_frequency=monthly",
            "etf_information": "/etf_information?interest_rate=8.5",
            "health": "/health"
        }
    }))
}

fn run(request: &ProjectionRequest) -> Result<Vec<YearlyResult>, ApiError> {
    debug!(
        initial_investment = request.initial_investment,
        monthly_contribution = request.monthly_contribution,
        annual_rate_percent = request.annual_rate_percent,
        horizon_years = request.horizon_years,
        frequency = %request.frequency,
        "projecting savings plan"
    );
    Ok(project_request(request)?)
}

fn query_error(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

/// Year-by-year projection from query parameters.
pub async fn get_calculation(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CalculationQuery>, QueryRejection>,
) -> Result<Json<Vec<YearlyResult>>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let request = query.into_request(state.max_horizon_years)?;
    Ok(Json(run(&request)?))
}

/// Year-by-year projection from a JSON body.
pub async fn post_calculation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculationBody>, JsonRejection>,
) -> Result<Json<Vec<YearlyResult>>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = body.into_request(state.max_horizon_years)?;
    Ok(Json(run(&request)?))
}

/// Final-year totals from query parameters.
pub async fn get_calculation_summary(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CalculationQuery>, QueryRejection>,
) -> Result<Json<ProjectionSummary>, ApiError> {
    let Query(query) = query.map_err(query_error)?;
    let request = query.into_request(state.max_horizon_years)?;
    let schedule = run(&request)?;
    summarize(&schedule)
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("projection produced no rows".to_string()))
}

/// Query parameters for ETF information.
#[derive(Debug, Default, Deserialize)]
pub struct EtfQuery {
    /// Target average return in percent
    pub interest_rate: Option<String>,
}

/// Envelope for ETF information responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct EtfInformationResponse {
    /// Whether recommendations were produced
    pub success: bool,
    /// Recommended ETFs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<EtfInformation>>,
    /// Number of ETFs in `data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EtfInformationResponse {
    fn ok(etfs: Vec<EtfInformation>) -> Self {
        Self {
            success: true,
            count: Some(etfs.len()),
            data: Some(etfs),
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(message.into()),
        }
    }
}

fn parse_target_rate(raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::BadRequest(
            "interest_rate parameter is required".to_string(),
        ));
    }

    let rate: f64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest("interest_rate must be a valid number".to_string()))?;

    if !(0.0..=100.0).contains(&rate) {
        return Err(ApiError::BadRequest(
            "interest_rate must be between 0 and 100".to_string(),
        ));
    }
    Ok(rate)
}

/// ETF recommendations for a target return.
pub async fn get_etf_information(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EtfQuery>, QueryRejection>,
) -> (StatusCode, Json<EtfInformationResponse>) {
    let result = match query {
        Ok(Query(query)) => recommend(&state, query.interest_rate.as_deref()).await,
        Err(rejection) => Err(query_error(rejection)),
    };

    match result {
        Ok(etfs) => (StatusCode::OK, Json(EtfInformationResponse::ok(etfs))),
        Err(err) => {
            match &err {
                ApiError::Upstream(cause) => error!(error = %cause, "ETF advisor failed"),
                ApiError::AdvisorUnavailable => warn!("ETF information requested but no advisor configured"),
                _ => {}
            }
            (
                err.status_code(),
                Json(EtfInformationResponse::failure(err.message())),
            )
        }
    }
}

async fn recommend(
    state: &AppState,
    raw_rate: Option<&str>,
) -> Result<Vec<EtfInformation>, ApiError> {
    let rate = parse_target_rate(raw_rate)?;
    let advisor = state.advisor.as_ref().ok_or(ApiError::AdvisorUnavailable)?;
    debug!(advisor = advisor.name(), rate, "requesting ETF recommendations");
    Ok(advisor.recommend(rate).await?)
}
