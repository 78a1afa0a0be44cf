//! Evidence source ports.
//!
//! Engines talk to the outside world only through these traits. Adapters live in
//! `argus-reputation` (remote provider) and `argus-registry` (offline registry).

use argus_types::{Identifier, UnavailableKind};
use async_trait::async_trait;

/// One risk category reported by a reputation provider.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskFinding {
    pub category: String,
    /// Provider-side severity, if the provider grades its categories.
    pub severity: Option<f64>,
}

impl RiskFinding {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            severity: None,
        }
    }
}

/// Raw risk evidence for one address. An empty `findings` list means "checked, nothing found".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReputationReport {
    pub findings: Vec<RiskFinding>,
    pub overall_risk: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("reputation provider timed out")]
    Timeout,
    #[error("reputation provider transport error: {0}")]
    Transport(String),
    #[error("reputation provider returned HTTP {0}")]
    Status(u16),
    #[error("malformed reputation payload: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn kind(&self) -> UnavailableKind {
        match self {
            ProviderError::Timeout => UnavailableKind::Timeout,
            ProviderError::Transport(_) => UnavailableKind::Transport,
            ProviderError::Status(_) => UnavailableKind::Status,
            ProviderError::Malformed(_) => UnavailableKind::Malformed,
        }
    }
}

/// Remote lookup of risk evidence for an address. Untrusted, possibly slow, possibly failing.
#[async_trait]
pub trait ReputationProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn lookup(&self, address: &Identifier) -> Result<ReputationReport, ProviderError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Trusted,
    Untrusted,
    NotFound,
}

/// Registry view of an issuer/asset pair. Read-only from the engine's perspective.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRecord {
    pub asset_id: String,
    pub issuer: Identifier,
    pub status: AssetStatus,
    /// The registry's stated concern for `Untrusted` records.
    pub concern: Option<String>,
}

impl AssetRecord {
    pub fn not_found(asset_id: &str, issuer: &Identifier) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            issuer: issuer.clone(),
            status: AssetStatus::NotFound,
            concern: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("trust registry unavailable: {0}")]
    Unavailable(String),
}

/// Known-good / known-bad issuers and asset identifiers.
#[async_trait]
pub trait TrustRegistry: Send + Sync {
    async fn lookup(&self, asset_id: &str, issuer: &Identifier)
    -> Result<AssetRecord, RegistryError>;
}
