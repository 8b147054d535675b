//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use nestegg_core::NestEggError;
use nestegg_traits::TraitError;

/// Message returned for an unrecognized compounding frequency.
pub const FREQUENCY_HELP: &str = "Invalid compound_frequency. Use: annually, semiannually, \
     quarterly, monthly, daily, or a number (1, 2, 3, 4, 6, 12, 365)";

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request parameter failed validation.
    #[error(transparent)]
    Validation(#[from] NestEggError),

    /// The request could not be read at all.
    #[error("{0}")]
    BadRequest(String),

    /// No ETF advisor is configured.
    #[error("ETF recommendations are not configured on this server")]
    AdvisorUnavailable,

    /// The ETF advisor failed.
    #[error("failed to get ETF information: {0}")]
    Upstream(#[from] TraitError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AdvisorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(NestEggError::UnsupportedFrequency { .. }) => {
                FREQUENCY_HELP.to_string()
            }
            Self::Validation(NestEggError::InvalidNumber { field, .. }) => {
                format!("Invalid {field} value")
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Validation(err) => json!({ "error": self.message(), "field": err.field() }),
            _ => json!({ "error": self.message() }),
        };
        (status, Json(body)).into_response()
    }
}
