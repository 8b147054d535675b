//! Request parameter decoding.
//!
//! Query strings arrive as text so each field can be reported by name when it
//! fails to parse. Fields are parsed in a fixed order, then range-checked in
//! that same order, and the first failure wins.

use serde::Deserialize;

use nestegg_core::{CompoundingFrequency, NestEggError, NestEggResult, ProjectionRequest};

/// Query parameters of `/calculation` and `/calculation/summary`.
#[derive(Debug, Default, Deserialize)]
pub struct CalculationQuery {
    /// Lump sum at year 0
    pub initial_investment: Option<String>,
    /// Monthly contribution
    pub monthly_contribution: Option<String>,
    /// Horizon in whole years
    pub saving_years: Option<String>,
    /// Annual rate in percent
    pub interest_rate: Option<String>,
    /// Named token or period count
    pub compound_frequency: Option<String>,
}

impl CalculationQuery {
    /// Parse and validate into a projection request.
    pub fn into_request(self, max_horizon_years: u32) -> NestEggResult<ProjectionRequest> {
        let initial_investment = parse_amount("initial_investment", self.initial_investment)?;
        let monthly_contribution =
            parse_amount("monthly_contribution", self.monthly_contribution)?;

        let raw_years = self.saving_years.unwrap_or_default();
        let horizon_years = raw_years
            .trim()
            .parse::<u32>()
            .map_err(|_| NestEggError::invalid_number("saving_years", raw_years.as_str()))?;

        let annual_rate_percent = parse_amount("interest_rate", self.interest_rate)?;

        let frequency = self
            .compound_frequency
            .unwrap_or_default()
            .parse::<CompoundingFrequency>()?;

        build(
            ProjectionRequest::new(
                initial_investment,
                monthly_contribution,
                annual_rate_percent,
                horizon_years,
                frequency,
            ),
            max_horizon_years,
        )
    }
}

/// JSON body of `POST /calculation`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationBody {
    /// Lump sum at year 0
    pub initial_investment: f64,
    /// Monthly contribution, zero when omitted
    #[serde(default)]
    pub monthly_contribution: f64,
    /// Horizon in whole years
    pub saving_years: u32,
    /// Annual rate in percent
    pub interest_rate: f64,
    /// Named token or period count
    pub compound_frequency: FrequencyInput,
}

/// A compounding frequency as sent in JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FrequencyInput {
    /// Periods per year, e.g. `12`
    Count(u32),
    /// Token such as `"monthly"` or `"12"`
    Token(String),
}

impl FrequencyInput {
    /// Resolve into a supported frequency.
    pub fn resolve(&self) -> NestEggResult<CompoundingFrequency> {
        match self {
            Self::Count(n) => CompoundingFrequency::try_from(*n),
            Self::Token(s) => s.parse(),
        }
    }
}

impl CalculationBody {
    /// Validate into a projection request.
    pub fn into_request(self, max_horizon_years: u32) -> NestEggResult<ProjectionRequest> {
        let frequency = self.compound_frequency.resolve()?;
        build(
            ProjectionRequest::new(
                self.initial_investment,
                self.monthly_contribution,
                self.interest_rate,
                self.saving_years,
                frequency,
            ),
            max_horizon_years,
        )
    }
}

fn parse_amount(field: &'static str, raw: Option<String>) -> NestEggResult<f64> {
    let raw = raw.unwrap_or_default();
    raw.trim()
        .parse::<f64>()
        .map_err(|_| NestEggError::invalid_number(field, raw.as_str()))
}

fn build(request: ProjectionRequest, max_horizon_years: u32) -> NestEggResult<ProjectionRequest> {
    request.validate_within(max_horizon_years)?;
    Ok(request)
}
