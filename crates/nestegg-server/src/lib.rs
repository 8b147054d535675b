//! # NestEgg Server
//!
//! REST server for NestEgg savings projections.
//!
//! ## Features
//!
//! - Year-by-year compound interest schedules (`GET`/`POST /calculation`)
//! - Final-year totals (`GET /calculation/summary`)
//! - ETF suggestions for a target return (`GET /etf_information`)
//! - Health endpoint
//! - Configuration via TOML file and environment
//!
//! ## Usage
//!
//! ```ignore
//! use nestegg_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default(), None);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod params;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use nestegg_traits::EtfAdvisor;

pub use config::{ConfigError, CorsConfig, ServerConfig};
pub use error::ApiError;
pub use handlers::AppState;

/// The NestEgg server.
pub struct Server {
    config: ServerConfig,
    advisor: Option<Arc<dyn EtfAdvisor>>,
}

impl Server {
    /// Create a new server.
    ///
    /// Without an advisor `/etf_information` answers 503.
    pub fn new(config: ServerConfig, advisor: Option<Arc<dyn EtfAdvisor>>) -> Self {
        Self { config, advisor }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            advisor: self.advisor.clone(),
            max_horizon_years: self.config.max_horizon_years,
        });

        routes::create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&self.config.cors))
    }

    /// Start the server and run until Ctrl-C.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = (self.config.host.as_str(), self.config.port);
        let listener = TcpListener::bind(addr).await?;

        info!("Starting NestEgg server on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Build the CORS layer from config.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let list: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(config.max_age_secs))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
