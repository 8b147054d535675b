//! # NestEgg Traits
//!
//! Trait definitions for the external collaborators of NestEgg.
//!
//! This crate contains ONLY trait definitions and the records they exchange.
//! Implementations live in extension crates (`nestegg-ext-openai`).
//!
//! ## Module Structure
//!
//! - [`advisor`]: ETF recommendation sources
//! - [`error`]: Failures reported by collaborators
//!
//! ## Dependency Injection
//!
//! The server receives its advisor as a trait object, so tests and alternate
//! backends plug in without touching the HTTP layer:
//!
//! ```ignore
//! let advisor: Arc<dyn EtfAdvisor> = Arc::new(OpenAiEtfAdvisor::new(config)?);
//! let server = Server::new(server_config, Some(advisor));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod advisor;
pub mod error;

// Re-export commonly used types
pub use advisor::{EtfAdvisor, EtfInformation};
pub use error::TraitError;
