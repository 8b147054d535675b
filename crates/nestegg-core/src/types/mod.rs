//! Domain types for savings projections.
//!
//! - [`CompoundingFrequency`]: How often interest is compounded
//! - [`ProjectionRequest`]: The plan to project
//! - [`YearlyResult`]: One row of the year-by-year schedule
//! - [`ProjectionSummary`]: Headline figures of a finished schedule

mod frequency;
mod projection;

pub use frequency::CompoundingFrequency;
pub use projection::{ProjectionRequest, ProjectionSummary, YearlyResult};
