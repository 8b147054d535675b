//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `state` - Shared handler state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/calculation",
            get(handlers::get_calculation).post(handlers::post_calculation),
        )
        .route(
            "/calculation/summary",
            get(handlers::get_calculation_summary),
        )
        .route("/etf_information", get(handlers::get_etf_information))
        .with_state(state)
}
