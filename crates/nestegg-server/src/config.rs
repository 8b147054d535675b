//! Server configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use nestegg_ext_openai::OpenAiConfig;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`ServerConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override has an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    InvalidOverride {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Longest projection horizon a request may ask for
    #[serde(default = "default_max_horizon_years")]
    pub max_horizon_years: u32,

    /// Cross-origin settings
    #[serde(default)]
    pub cors: CorsConfig,

    /// ETF advisor settings
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// Cross-origin resource sharing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// How long browsers may cache a preflight response
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3536
}

fn default_max_horizon_years() -> u32 {
    200
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_max_age_secs() -> u64 {
    12 * 60 * 60
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl CorsConfig {
    /// True when any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_horizon_years: default_max_horizon_years(),
            cors: CorsConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `NESTEGG_HOST`, `NESTEGG_PORT` and `OPENAI_API_KEY` from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// The API key from the lookup only fills a key missing from the file.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("NESTEGG_HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("NESTEGG_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidOverride {
                    name: "NESTEGG_PORT",
                    value: port.clone(),
                })?;
        }

        if !self.openai.has_api_key() {
            if let Some(key) = lookup("OPENAI_API_KEY") {
                self.openai.api_key = Some(key);
            }
        }

        Ok(())
    }
}
