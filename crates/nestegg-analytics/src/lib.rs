//! # NestEgg Analytics
//!
//! Year-by-year compound interest projections for savings plans.
//!
//! The engine is a pure function of its inputs: no I/O, no shared state, and
//! no failure modes once a [`ProjectionRequest`](nestegg_core::ProjectionRequest)
//! has validated. It is safe to call from any number of threads at once.
//!
//! ## Usage
//!
//! ```rust
//! use nestegg_analytics::prelude::*;
//! use nestegg_core::CompoundingFrequency;
//!
//! let schedule = project(1000.0, 100.0, 8.0, 10, CompoundingFrequency::Monthly);
//! assert_eq!(schedule.len(), 11);
//!
//! let summary = summarize(&schedule).unwrap();
//! assert!(summary.final_amount > summary.total_contributions);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod projection;

pub use projection::{project, project_request, summarize};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::projection::{
        project, project_request, summarize, DAILY_APPROXIMATION_DAYS_PER_MONTH,
    };
}
