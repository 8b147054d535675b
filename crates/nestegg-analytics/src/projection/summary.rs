use nestegg_core::{ProjectionSummary, YearlyResult};

/// Headline figures of a schedule, taken from its last row.
///
/// Returns `None` for an empty schedule. Schedules built by
/// [`project`](super::project) always have at least the year 0 row.
pub fn summarize(schedule: &[YearlyResult]) -> Option<ProjectionSummary> {
    schedule.last().map(ProjectionSummary::from)
}
