//! Prompt template and response decoding.

use nestegg_traits::{EtfInformation, TraitError};

/// Number of ETFs the prompt asks for.
pub const REQUESTED_ETF_COUNT: usize = 10;

/// Builds the recommendation prompt for a target average return in percent.
pub fn etf_prompt(target_return_percent: f64) -> String {
    format!(
        r#"Analyze the US markets and list exactly {count} ETFs whose historical average annual return over the past 5 years is close to {target:.2}%.

For each ETF provide these fields in a JSON array:
- etf_symbol: the ticker symbol (string)
- etf_name: the full fund name (string)
- etf_avg_return: the 5-year historical average annual return as a number in percent (e.g. 8.5 for 8.5%)
- etf_description: a short description of the fund's investment focus and strategy (string)

Return ONLY a valid JSON array, with no other text and no markdown formatting.

Example:
[
  {{
    "etf_symbol": "SPY",
    "etf_name": "SPDR S&P 500 ETF Trust",
    "etf_avg_return": 10.5,
    "etf_description": "Tracks the S&P 500 index, providing broad exposure to large-cap US equities."
  }}
]"#,
        count = REQUESTED_ETF_COUNT,
        target = target_return_percent,
    )
}

/// Removes a surrounding markdown code fence, if any.
///
/// Handles both "```json" and bare "```" openers.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let closed = opened.strip_suffix("```").unwrap_or(opened);
    closed.trim()
}

/// Decodes the model's answer into ETF records.
///
/// An empty array is an error: the caller asked for recommendations and got none.
pub fn parse_etf_response(content: &str) -> Result<Vec<EtfInformation>, TraitError> {
    let body = strip_code_fence(content);

    let etfs: Vec<EtfInformation> = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, content = body, "ETF response is not a valid JSON array");
        TraitError::ParseError(format!("invalid JSON format: {e}"))
    })?;

    if etfs.is_empty() {
        return Err(TraitError::EmptyResponse(
            "no ETF information returned".to_string(),
        ));
    }

    Ok(etfs)
}
