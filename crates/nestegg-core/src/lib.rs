//! # NestEgg Core
//!
//! Core types and error definitions for NestEgg savings projections.
//!
//! This crate provides the foundational building blocks used throughout NestEgg:
//!
//! - **Types**: `CompoundingFrequency`, `ProjectionRequest`, `YearlyResult`, `ProjectionSummary`
//! - **Errors**: `NestEggError` for validation of user-supplied plan parameters
//!
//! ## Design Philosophy
//!
//! - **Closed Domains**: Compounding frequencies are an enum, so unsupported
//!   period lengths are rejected at the edge instead of guessed at in the engine
//! - **Plain Floats**: Amounts are `f64`; no rounding is applied until serialization
//!
//! ## Example
//!
//! ```rust
//! use nestegg_core::prelude::*;
//!
//! let frequency: CompoundingFrequency = "monthly".parse().unwrap();
//! assert_eq!(frequency.periods_per_year(), 12);
//!
//! let request = ProjectionRequest::new(1000.0, 100.0, 8.0, 10, frequency);
//! assert!(request.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{NestEggError, NestEggResult};
    pub use crate::types::{
        CompoundingFrequency, ProjectionRequest, ProjectionSummary, YearlyResult,
    };
}

// Re-export commonly used types at crate root
pub use error::{NestEggError, NestEggResult};
pub use types::{CompoundingFrequency, ProjectionRequest, ProjectionSummary, YearlyResult};
