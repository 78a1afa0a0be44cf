//! The `scan` and `verify-asset` use cases: run an engine and wrap the outcome in a receipt.

use crate::Engines;
use argus_types::{SCHEMA_RECEIPT_V1, ScreeningOutcome, ScreeningReceipt, Subject, ToolMeta};
use std::future::Future;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct VerifyInput {
    pub asset_id: String,
    pub issuer: String,
    pub declared_value: f64,
}

pub async fn run_scan(engines: &Engines, address: &str) -> ScreeningReceipt {
    let subject = Subject::Wallet {
        address: address.to_string(),
    };
    timed(subject, engines.wallet.screen_wallet(address)).await
}

pub async fn run_verify(engines: &Engines, input: &VerifyInput) -> ScreeningReceipt {
    let subject = Subject::Asset {
        asset_id: input.asset_id.clone(),
        issuer: input.issuer.clone(),
        declared_value: input.declared_value,
    };
    let outcome =
        engines
            .asset
            .verify_asset(&input.asset_id, &input.issuer, input.declared_value);
    timed(subject, outcome).await
}

async fn timed(
    subject: Subject,
    outcome: impl Future<Output = ScreeningOutcome>,
) -> ScreeningReceipt {
    let started_at = OffsetDateTime::now_utc();
    let outcome = outcome.await;
    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    let fingerprint = argus_domain::fingerprint_outcome(&subject.canonical(), &outcome);
    ScreeningReceipt {
        schema: SCHEMA_RECEIPT_V1.to_string(),
        tool: ToolMeta {
            name: "argus".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        duration_ms,
        subject,
        outcome,
        fingerprint,
    }
}

/// 0 safe, 2 unsafe, 3 invalid input, 4 screening unavailable.
pub fn outcome_exit_code(outcome: &ScreeningOutcome) -> i32 {
    match outcome {
        ScreeningOutcome::Verdict(v) if v.is_safe() => 0,
        ScreeningOutcome::Verdict(_) => 2,
        ScreeningOutcome::ValidationFailed(_) => 3,
        ScreeningOutcome::Unavailable(_) => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_domain::policy::EnginePolicy;
    use argus_domain::ports::{AssetStatus, ProviderError};
    use argus_domain::testing::{FakeReputationProvider, FakeTrustRegistry, ISSUER, WALLET};
    use std::sync::Arc;

    fn engines(provider: FakeReputationProvider) -> Engines {
        let registry =
            FakeTrustRegistry::new().with_record("LAND-NG-001", ISSUER, AssetStatus::Trusted, None);
        Engines::from_parts(
            Arc::new(provider),
            Arc::new(registry),
            EnginePolicy::default(),
        )
    }

    #[tokio::test]
    async fn scan_receipt_wraps_outcome() {
        let receipt = run_scan(&engines(FakeReputationProvider::clean()), WALLET).await;
        assert_eq!(receipt.schema, SCHEMA_RECEIPT_V1);
        assert_eq!(receipt.tool.name, "argus");
        assert!(receipt.finished_at >= receipt.started_at);
        assert_eq!(receipt.outcome.label(), "safe");
        assert_eq!(outcome_exit_code(&receipt.outcome), 0);
        assert_eq!(receipt.fingerprint.len(), 64);
    }

    #[tokio::test]
    async fn fingerprint_is_stable_across_runs() {
        let e = engines(FakeReputationProvider::flagged(&["phishing"]));
        let a = run_scan(&e, WALLET).await;
        let b = run_scan(&e, WALLET).await;
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(outcome_exit_code(&a.outcome), 2);
    }

    #[tokio::test]
    async fn verify_records_declared_value() {
        let input = VerifyInput {
            asset_id: "LAND-NG-001".to_string(),
            issuer: ISSUER.to_string(),
            declared_value: 50_000.0,
        };
        let receipt = run_verify(&engines(FakeReputationProvider::clean()), &input).await;
        assert!(matches!(
            receipt.subject,
            Subject::Asset { declared_value, .. } if declared_value == 50_000.0
        ));
        assert_eq!(outcome_exit_code(&receipt.outcome), 0);
    }

    #[tokio::test]
    async fn exit_codes_distinguish_every_outcome() {
        let invalid = run_scan(&engines(FakeReputationProvider::clean()), "nope").await;
        assert_eq!(outcome_exit_code(&invalid.outcome), 3);

        let down = run_scan(
            &engines(FakeReputationProvider::failing(ProviderError::Status(503))),
            WALLET,
        )
        .await;
        assert_eq!(outcome_exit_code(&down.outcome), 4);
    }
}
