//! Timed evidence source calls.
//!
//! Each lookup runs on its own spawned task and the engine waits on the join handle under a
//! timeout. When the timeout fires, or the caller drops the request future, the handle is
//! dropped: the task keeps running to completion and its answer is discarded.

use crate::ports::{AssetRecord, ReputationProvider, ReputationReport, TrustRegistry};
use argus_types::{EvidenceSource, Identifier, ScreeningUnavailable, UnavailableKind};
use std::sync::Arc;
use std::time::Duration;

pub(crate) async fn reputation(
    provider: &Arc<dyn ReputationProvider>,
    address: &Identifier,
    timeout: Duration,
) -> Result<ReputationReport, ScreeningUnavailable> {
    let task = {
        let provider = Arc::clone(provider);
        let address = address.clone();
        tokio::spawn(async move { provider.lookup(&address).await })
    };

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(Ok(report))) => Ok(report),
        Ok(Ok(Err(err))) => Err(ScreeningUnavailable {
            source: EvidenceSource::Reputation,
            kind: err.kind(),
            detail: err.to_string(),
        }),
        Ok(Err(join)) => Err(ScreeningUnavailable {
            source: EvidenceSource::Reputation,
            kind: UnavailableKind::Transport,
            detail: format!("reputation lookup task failed: {join}"),
        }),
        Err(_) => Err(ScreeningUnavailable {
            source: EvidenceSource::Reputation,
            kind: UnavailableKind::Timeout,
            detail: format!(
                "{} did not answer within {}ms",
                provider.name(),
                timeout.as_millis()
            ),
        }),
    }
}

pub(crate) async fn registry(
    registry: &Arc<dyn TrustRegistry>,
    asset_id: &str,
    issuer: &Identifier,
    timeout: Duration,
) -> Result<AssetRecord, ScreeningUnavailable> {
    let task = {
        let registry = Arc::clone(registry);
        let asset_id = asset_id.to_string();
        let issuer = issuer.clone();
        tokio::spawn(async move { registry.lookup(&asset_id, &issuer).await })
    };

    let unavailable = |detail: String| ScreeningUnavailable {
        source: EvidenceSource::Registry,
        kind: UnavailableKind::Registry,
        detail,
    };

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(Ok(record))) => Ok(record),
        Ok(Ok(Err(err))) => Err(unavailable(err.to_string())),
        Ok(Err(join)) => Err(unavailable(format!("registry lookup task failed: {join}"))),
        Err(_) => Err(ScreeningUnavailable {
            source: EvidenceSource::Registry,
            kind: UnavailableKind::Timeout,
            detail: format!("trust registry did not answer within {}ms", timeout.as_millis()),
        }),
    }
}
