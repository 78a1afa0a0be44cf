//! In-memory evidence sources for tests.

use crate::ports::{
    AssetRecord, AssetStatus, ProviderError, RegistryError, ReputationProvider, ReputationReport,
    RiskFinding, TrustRegistry,
};
use argus_types::Identifier;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
pub const ISSUER: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
pub const ISSUER_60: &str = "0xa1b2c3d4e5a1b2c3d4e5a1b2c3d4e5a1b2c3d4e5a1b2c3d4e5f6a7b8c9";

const HANG: Duration = Duration::from_secs(3_600);

#[derive(Clone, Debug)]
pub struct FakeReputationProvider {
    answer: Result<ReputationReport, ProviderError>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl FakeReputationProvider {
    pub fn clean() -> Self {
        Self::answering(Ok(ReputationReport::default()))
    }

    pub fn flagged(categories: &[&str]) -> Self {
        Self::answering(Ok(ReputationReport {
            findings: categories.iter().map(|c| RiskFinding::new(*c)).collect(),
            overall_risk: Some(90.0),
        }))
    }

    pub fn failing(err: ProviderError) -> Self {
        Self::answering(Err(err))
    }

    /// Clean, but never answers within any sane timeout.
    pub fn hanging() -> Self {
        Self::clean().with_delay(HANG)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Lookups started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Lookups that ran to the end, whether or not anyone was still waiting.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    fn answering(answer: Result<ReputationReport, ProviderError>) -> Self {
        Self {
            answer,
            delay: None,
            calls: Arc::default(),
            completed: Arc::default(),
        }
    }
}

#[async_trait]
impl ReputationProvider for FakeReputationProvider {
    fn name(&self) -> &str {
        "fake-reputation"
    }

    async fn lookup(&self, _address: &Identifier) -> Result<ReputationReport, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeTrustRegistry {
    records: HashMap<(String, String), (AssetStatus, Option<String>)>,
    failure: Option<String>,
    delay: Option<Duration>,
    lookups: Arc<AtomicUsize>,
}

impl FakeTrustRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn with_record(
        mut self,
        asset_id: &str,
        issuer: &str,
        status: AssetStatus,
        concern: Option<&str>,
    ) -> Self {
        self.records.insert(
            (asset_id.to_string(), issuer.to_string()),
            (status, concern.map(str::to_string)),
        );
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrustRegistry for FakeTrustRegistry {
    async fn lookup(
        &self,
        asset_id: &str,
        issuer: &Identifier,
    ) -> Result<AssetRecord, RegistryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.failure {
            return Err(RegistryError::Unavailable(reason.clone()));
        }
        let key = (asset_id.to_string(), issuer.as_str().to_string());
        Ok(match self.records.get(&key) {
            Some((status, concern)) => AssetRecord {
                asset_id: asset_id.to_string(),
                issuer: issuer.clone(),
                status: *status,
                concern: concern.clone(),
            },
            None => AssetRecord::not_found(asset_id, issuer),
        })
    }
}
