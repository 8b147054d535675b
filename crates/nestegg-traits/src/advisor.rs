//! ETF recommendation source trait.
//!
//! An [`EtfAdvisor`] answers one question: which exchange traded funds have
//! historically returned roughly a given percentage per year. Answers come
//! from external, non-deterministic services and are never cached or
//! fabricated locally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;

/// One suggested ETF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfInformation {
    /// Ticker symbol, e.g. `SPY`
    pub etf_symbol: String,
    /// Full fund name
    pub etf_name: String,
    /// Historical average annual return in percent (8.5 means 8.5%)
    pub etf_avg_return: f64,
    /// Short description of the fund's focus and strategy
    pub etf_description: String,
}

/// Trait for ETF recommendation providers.
#[async_trait]
pub trait EtfAdvisor: Send + Sync {
    /// Short name of the backing service, for logs.
    fn name(&self) -> &str;

    /// Suggest ETFs whose historical average return is close to
    /// `target_return_percent`.
    ///
    /// Implementations return at least one entry or an error.
    async fn recommend(&self, target_return_percent: f64)
        -> Result<Vec<EtfInformation>, TraitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAdvisor(Vec<EtfInformation>);

    #[async_trait]
    impl EtfAdvisor for FixedAdvisor {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn recommend(&self, _target: f64) -> Result<Vec<EtfInformation>, TraitError> {
            if self.0.is_empty() {
                return Err(TraitError::EmptyResponse("no entries".into()));
            }
            Ok(self.0.clone())
        }
    }

    fn spy() -> EtfInformation {
        EtfInformation {
            etf_symbol: "SPY".to_string(),
            etf_name: "SPDR S&P 500 ETF Trust".to_string(),
            etf_avg_return: 10.5,
            etf_description: "Tracks the S&P 500 index.".to_string(),
        }
    }

    #[test]
    fn test_etf_information_wire_names() {
        let json = serde_json::to_value(spy()).unwrap();
        assert_eq!(json["etf_symbol"], "SPY");
        assert_eq!(json["etf_avg_return"], 10.5);
        assert!(json["etf_name"].is_string());
        assert!(json["etf_description"].is_string());
    }

    #[tokio::test]
    async fn test_advisor_as_trait_object() {
        let advisor: Box<dyn EtfAdvisor> = Box::new(FixedAdvisor(vec![spy()]));
        let etfs = advisor.recommend(10.0).await.unwrap();
        assert_eq!(etfs.len(), 1);
        assert_eq!(advisor.name(), "fixed");

        let empty: Box<dyn EtfAdvisor> = Box::new(FixedAdvisor(vec![]));
        assert!(matches!(
            empty.recommend(10.0).await,
            Err(TraitError::EmptyResponse(_))
        ));
    }
}
