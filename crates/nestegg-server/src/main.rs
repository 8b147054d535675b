//! NestEgg server entry point.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nestegg_ext_openai::OpenAiEtfAdvisor;
use nestegg_server::{Server, ServerConfig};
use nestegg_traits::EtfAdvisor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,nestegg=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("NestEgg Server v{}", env!("CARGO_PKG_VERSION"));

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => info!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    }

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/nestegg.toml".to_string());

    let mut server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };
    server_config.apply_env_overrides()?;

    // Build the advisor only when a key is available
    let advisor: Option<Arc<dyn EtfAdvisor>> = if server_config.openai.has_api_key() {
        let advisor = OpenAiEtfAdvisor::new(server_config.openai.clone())?;
        info!(model = %server_config.openai.model, "ETF advisor configured");
        Some(Arc::new(advisor))
    } else {
        warn!("OPENAI_API_KEY not set; /etf_information will be unavailable");
        None
    };

    // Start server
    let server = Server::new(server_config, advisor);
    server.start().await?;

    Ok(())
}
