//! Chat completions client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nestegg_traits::{EtfAdvisor, EtfInformation, TraitError};

use crate::config::OpenAiConfig;
use crate::prompt::{etf_prompt, parse_etf_response};

/// ETF advisor backed by an OpenAI-compatible `/chat/completions` endpoint.
///
/// Every call makes exactly one HTTP request; nothing is retried.
#[derive(Clone)]
pub struct OpenAiEtfAdvisor {
    http: Client,
    api_key: String,
    config: OpenAiConfig,
}

impl fmt::Debug for OpenAiEtfAdvisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiEtfAdvisor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenAiEtfAdvisor {
    /// Create a new advisor.
    ///
    /// Fails if the config carries no API key.
    pub fn new(config: OpenAiConfig) -> Result<Self, TraitError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TraitError::AuthenticationFailed("no API key configured".to_string())
            })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TraitError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    /// The settings this advisor was built with.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Sends a single-turn user prompt and returns the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, TraitError> {
        let url = self.config.completions_url();
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(%url, model = %self.config.model, "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TraitError::ParseError(format!("unexpected completion payload: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| TraitError::EmptyResponse("no choices in completion".to_string()))
    }
}

#[async_trait]
impl EtfAdvisor for OpenAiEtfAdvisor {
    fn name(&self) -> &str {
        "openai"
    }

    async fn recommend(
        &self,
        target_return_percent: f64,
    ) -> Result<Vec<EtfInformation>, TraitError> {
        if !target_return_percent.is_finite() {
            return Err(TraitError::InvalidInput(format!(
                "target return must be finite, got {target_return_percent}"
            )));
        }

        let content = self.complete(&etf_prompt(target_return_percent)).await?;
        let etfs = parse_etf_response(&content)?;

        info!(
            target_return_percent,
            count = etfs.len(),
            "received ETF recommendations"
        );
        Ok(etfs)
    }
}

fn transport_error(err: reqwest::Error) -> TraitError {
    if err.is_timeout() {
        TraitError::Timeout
    } else {
        TraitError::ConnectionFailed(err.to_string())
    }
}

fn status_error(status: StatusCode, body: &str) -> TraitError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TraitError::AuthenticationFailed(format!("{status}: {body}"))
        }
        StatusCode::TOO_MANY_REQUESTS => TraitError::RateLimited,
        _ => TraitError::ConnectionFailed(format!("completion endpoint returned {status}: {body}")),
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
