//! Compound interest projection schedules.
//!
//! Contributions arrive monthly while interest compounds at the plan's
//! frequency. For a frequency with a whole-month period, each period first
//! compounds the running balance and then adds the contributions that arrived
//! during the period as one lump sum. Money contributed within a period
//! therefore earns nothing until the next period starts.
//!
//! # Daily compounding
//!
//! Daily compounding is approximated month by month: each month the balance
//! grows by `(1 + r/365)^30` and then receives that month's contribution. A
//! year is therefore 360 compounding days, not 365, and calendar month lengths
//! are ignored. This is a known simplification, not an Actual/365 model.

mod summary;

pub use summary::summarize;

use nestegg_core::{CompoundingFrequency, NestEggResult, ProjectionRequest, YearlyResult};

/// Days per month assumed by the daily compounding approximation.
pub const DAILY_APPROXIMATION_DAYS_PER_MONTH: f64 = 30.0;

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Projects a savings plan year by year.
///
/// Returns `horizon_years + 1` rows. Row 0 is the starting state with no
/// interest; row `y` holds the balance after `y` full years.
///
/// `current_principal` is counted straight-line as
/// `initial_investment + year * 12 * monthly_contribution`, independent of when
/// contributions were credited within the year.
///
/// # Arguments
///
/// * `initial_investment` - Lump sum at year 0
/// * `monthly_contribution` - Amount added each month (negative for withdrawals)
/// * `annual_rate_percent` - Nominal annual rate, e.g. `8.0` for 8%
/// * `horizon_years` - Number of years to project
/// * `frequency` - Compounding frequency
#[must_use]
pub fn project(
    initial_investment: f64,
    monthly_contribution: f64,
    annual_rate_percent: f64,
    horizon_years: u32,
    frequency: CompoundingFrequency,
) -> Vec<YearlyResult> {
    let annual_rate = annual_rate_percent / 100.0;

    let mut schedule = Vec::with_capacity(horizon_years as usize + 1);
    schedule.push(YearlyResult::initial(initial_investment));

    let mut balance = initial_investment;

    for year in 1..=horizon_years {
        balance = match frequency.months_per_period() {
            Some(months_per_period) => compound_by_period(
                balance,
                annual_rate,
                frequency.periods_per_year(),
                months_per_period,
                monthly_contribution,
            ),
            None => compound_daily_by_month(balance, annual_rate, monthly_contribution),
        };

        let current_principal =
            initial_investment + f64::from(year) * MONTHS_PER_YEAR * monthly_contribution;

        schedule.push(YearlyResult {
            year,
            current_principal,
            interest_earned: balance - current_principal,
            total_amount: balance,
        });
    }

    schedule
}

/// Validates `request` and projects it.
pub fn project_request(request: &ProjectionRequest) -> NestEggResult<Vec<YearlyResult>> {
    request.validate()?;

    Ok(project(
        request.initial_investment,
        request.monthly_contribution,
        request.annual_rate_percent,
        request.horizon_years,
        request.frequency,
    ))
}

/// One year of whole-month compounding periods.
fn compound_by_period(
    mut balance: f64,
    annual_rate: f64,
    compounding_per_year: u32,
    months_per_period: u32,
    monthly_contribution: f64,
) -> f64 {
    let periods_per_year = 12 / months_per_period;
    let rate_per_period = annual_rate / f64::from(compounding_per_year);
    let contribution_per_period = monthly_contribution * f64::from(months_per_period);

    for _ in 0..periods_per_year {
        balance *= 1.0 + rate_per_period;
        balance += contribution_per_period;
    }

    balance
}

/// One year of the 30-day-month daily approximation.
fn compound_daily_by_month(mut balance: f64, annual_rate: f64, monthly_contribution: f64) -> f64 {
    let monthly_growth = (1.0 + annual_rate / DAYS_PER_YEAR).powf(DAILY_APPROXIMATION_DAYS_PER_MONTH);

    for _ in 0..12 {
        balance *= monthly_growth;
        balance += monthly_contribution;
    }

    balance
}
