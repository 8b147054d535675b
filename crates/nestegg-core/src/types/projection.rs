//! Projection inputs and outputs.

use serde::{Deserialize, Serialize};

use super::frequency::CompoundingFrequency;
use crate::error::{NestEggError, NestEggResult};

/// Parameters of a savings plan to project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Lump sum invested at year 0.
    pub initial_investment: f64,
    /// Amount added every month. Negative values model withdrawals.
    pub monthly_contribution: f64,
    /// Nominal annual rate in percent (8.0 means 8%). Negative values model losses.
    pub annual_rate_percent: f64,
    /// Number of years to project.
    pub horizon_years: u32,
    /// How often interest is compounded.
    pub frequency: CompoundingFrequency,
}

impl ProjectionRequest {
    /// Creates a new projection request.
    #[must_use]
    pub fn new(
        initial_investment: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        horizon_years: u32,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self {
            initial_investment,
            monthly_contribution,
            annual_rate_percent,
            horizon_years,
            frequency,
        }
    }

    /// Checks the amounts are usable.
    ///
    /// All amounts must be finite and the initial investment non-negative.
    pub fn validate(&self) -> NestEggResult<()> {
        self.validate_within(u32::MAX)
    }

    /// Like [`validate`](Self::validate), also bounding the horizon.
    ///
    /// Fields are checked in request order (initial investment, monthly
    /// contribution, horizon, rate) and the first failure is returned.
    pub fn validate_within(&self, max_horizon_years: u32) -> NestEggResult<()> {
        if !self.initial_investment.is_finite() {
            return Err(NestEggError::out_of_range(
                "initial_investment",
                "must be a finite number",
            ));
        }
        if self.initial_investment < 0.0 {
            return Err(NestEggError::out_of_range(
                "initial_investment",
                "must not be negative",
            ));
        }
        if !self.monthly_contribution.is_finite() {
            return Err(NestEggError::out_of_range(
                "monthly_contribution",
                "must be a finite number",
            ));
        }
        if self.horizon_years > max_horizon_years {
            return Err(NestEggError::out_of_range(
                "saving_years",
                format!("must not exceed {max_horizon_years}"),
            ));
        }
        if !self.annual_rate_percent.is_finite() {
            return Err(NestEggError::out_of_range(
                "interest_rate",
                "must be a finite number",
            ));
        }
        Ok(())
    }

    /// Annual rate as a decimal fraction (0.08 for 8%).
    #[must_use]
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0
    }
}

/// Balance of the plan at the end of one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyResult {
    /// Year index; 0 is the starting state.
    pub year: u32,
    /// Initial investment plus every contribution made through this year.
    pub current_principal: f64,
    /// `total_amount - current_principal`.
    pub interest_earned: f64,
    /// Running balance at year end.
    pub total_amount: f64,
}

impl YearlyResult {
    /// The year 0 row for a plan starting with `initial_investment`.
    #[must_use]
    pub fn initial(initial_investment: f64) -> Self {
        Self {
            year: 0,
            current_principal: initial_investment,
            interest_earned: 0.0,
            total_amount: initial_investment,
        }
    }
}

/// Headline figures taken from the last row of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Number of projected years.
    pub years: u32,
    /// Initial investment plus all contributions.
    pub total_contributions: f64,
    /// Growth on top of the contributions.
    pub total_interest: f64,
    /// Balance at the end of the horizon.
    pub final_amount: f64,
}

impl From<&YearlyResult> for ProjectionSummary {
    fn from(last: &YearlyResult) -> Self {
        Self {
            years: last.year,
            total_contributions: last.current_principal,
            total_interest: last.interest_earned,
            final_amount: last.total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(initial: f64) -> ProjectionRequest {
        ProjectionRequest::new(initial, 100.0, 8.0, 10, CompoundingFrequency::Monthly)
    }

    #[test]
    fn test_validate_accepts_plain_plan() {
        assert!(request(1000.0).validate().is_ok());
        assert!(request(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_initial() {
        let err = request(-1.0).validate().unwrap_err();
        assert_eq!(err.field(), "initial_investment");
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(request(f64::NAN).validate().is_err());
        assert!(request(f64::INFINITY).validate().is_err());

        let mut req = request(1000.0);
        req.monthly_contribution = f64::NEG_INFINITY;
        assert_eq!(req.validate().unwrap_err().field(), "monthly_contribution");

        let mut req = request(1000.0);
        req.annual_rate_percent = f64::NAN;
        assert_eq!(req.validate().unwrap_err().field(), "interest_rate");
    }

    #[test]
    fn test_validate_within_reports_fields_in_order() {
        let mut req = request(-5.0);
        req.horizon_years = 500;
        assert_eq!(req.validate_within(200).unwrap_err().field(), "initial_investment");

        let mut req = request(1000.0);
        req.horizon_years = 500;
        req.annual_rate_percent = f64::NAN;
        assert_eq!(req.validate_within(200).unwrap_err().field(), "saving_years");

        req.horizon_years = 200;
        assert_eq!(req.validate_within(200).unwrap_err().field(), "interest_rate");
    }

    #[test]
    fn test_negative_contribution_is_valid() {
        let mut req = request(1000.0);
        req.monthly_contribution = -50.0;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_annual_rate() {
        approx::assert_relative_eq!(request(1000.0).annual_rate(), 0.08);
    }

    #[test]
    fn test_yearly_result_field_names() {
        let json = serde_json::to_value(YearlyResult::initial(1000.0)).unwrap();
        assert_eq!(json["year"], 0);
        assert_eq!(json["current_principal"], 1000.0);
        assert_eq!(json["interest_earned"], 0.0);
        assert_eq!(json["total_amount"], 1000.0);
    }

    #[test]
    fn test_summary_from_last_row() {
        let last = YearlyResult {
            year: 5,
            current_principal: 7000.0,
            interest_earned: 1234.5,
            total_amount: 8234.5,
        };
        let summary = ProjectionSummary::from(&last);
        assert_eq!(summary.years, 5);
        assert_eq!(summary.total_contributions, 7000.0);
        assert_eq!(summary.total_interest, 1234.5);
        assert_eq!(summary.final_amount, 8234.5);
    }
}
