//! Reputation provider adapter over HTTP.
//!
//! `GET {base_url}/addresses/{address}` with the API key in `x-api-key`. Response bodies
//! are mapped into a [`ReputationReport`]; every failure is classified into a
//! [`ProviderError`] so the engine can report it as "screening unavailable".

#![forbid(unsafe_code)]

mod payload;

pub use payload::parse_report;

use anyhow::Context;
use argus_domain::ports::{ProviderError, ReputationProvider, ReputationReport};
use argus_types::Identifier;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const DEFAULT_BASE_URL: &str = "https://api.webacy.com";

const USER_AGENT: &str = concat!("argus/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Applied to the whole request, connect included.
    pub timeout: Duration,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Pooled HTTP client for one reputation service. Cheap to share behind an `Arc`.
#[derive(Clone, Debug)]
pub struct HttpReputationProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpReputationProvider {
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .context("build reputation HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn address_url(&self, address: &Identifier) -> String {
        format!(
            "{}/addresses/{}",
            self.config.base_url.trim_end_matches('/'),
            address
        )
    }
}

fn classify(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(err.to_string())
    }
}

#[async_trait]
impl ReputationProvider for HttpReputationProvider {
    fn name(&self) -> &str {
        "reputation provider"
    }

    async fn lookup(&self, address: &Identifier) -> Result<ReputationReport, ProviderError> {
        let mut request = self
            .client
            .get(self.address_url(address))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%address, status = status.as_u16(), "reputation provider refused");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        let report = payload::parse_report(&body)?;
        tracing::debug!(
            %address,
            findings = report.findings.len(),
            overall_risk = ?report.overall_risk,
            "reputation report received"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: Some("sk-live-123".to_string()),
            timeout: Duration::from_secs(5),
        };
        let shown = format!("{config:?}");
        assert!(!shown.contains("sk-live-123"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn address_url_tolerates_trailing_slash() {
        let provider = HttpReputationProvider::new(ProviderConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            api_key: None,
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let address = argus_types::validate("0x742d35Cc6634C0532925a3b844Bc454e4438f44e").unwrap();
        assert_eq!(
            provider.address_url(&address),
            "http://127.0.0.1:9/addresses/0x742d35Cc6634C0532925a3b844Bc454e4438f44e"
        );
    }
}
