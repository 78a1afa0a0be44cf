use argus_types::{
    Evidence, EvidenceSource, Field, SCHEMA_RECEIPT_V1, ScreeningOutcome, ScreeningReceipt,
    ScreeningUnavailable, Subject, ToolMeta, UnavailableKind, UnknownPolicy, ValidationError,
    ValidationFailure, Verdict, VerdictHint, ids,
};
use time::macros::datetime;

const WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

fn receipt(subject: Subject, outcome: ScreeningOutcome, fingerprint: &str) -> ScreeningReceipt {
    ScreeningReceipt {
        schema: SCHEMA_RECEIPT_V1.to_string(),
        tool: ToolMeta {
            name: "argus".to_string(),
            version: "0.1.0".to_string(),
        },
        started_at: datetime!(2026-01-01 00:00:00 UTC),
        finished_at: datetime!(2026-01-01 00:00:00.003 UTC),
        duration_ms: 3,
        subject,
        outcome,
        fingerprint: fingerprint.to_string(),
    }
}

fn wallet() -> Subject {
    Subject::Wallet {
        address: WALLET.to_string(),
    }
}

fn asset(asset_id: &str) -> Subject {
    Subject::Asset {
        asset_id: asset_id.to_string(),
        issuer: WALLET.to_string(),
        declared_value: 50_000.0,
    }
}

pub(crate) fn flagged_wallet() -> ScreeningReceipt {
    let evidence: Vec<Evidence> = ["mixer-contact", "sanctioned-entity"]
        .into_iter()
        .map(|c| {
            Evidence::new(
                EvidenceSource::Reputation,
                VerdictHint::Risky,
                1.0,
                format!("Address flagged by reputation provider: {c}"),
            )
            .with_flag(c)
        })
        .collect();
    receipt(
        wallet(),
        ScreeningOutcome::Verdict(Verdict::reconcile(&evidence, UnknownPolicy::Permit)),
        "5f1c0e2a",
    )
}

pub(crate) fn trusted_asset() -> ScreeningReceipt {
    let evidence = [Evidence::new(
        EvidenceSource::Registry,
        VerdictHint::Clean,
        1.0,
        ids::REASON_REGISTRY_VERIFIED,
    )];
    receipt(
        asset("LAND-NG-001"),
        ScreeningOutcome::Verdict(Verdict::reconcile(&evidence, UnknownPolicy::Deny)),
        "9b7d11aa",
    )
}

pub(crate) fn unverified_asset() -> ScreeningReceipt {
    let evidence = [Evidence::new(
        EvidenceSource::Registry,
        VerdictHint::Unknown,
        1.0,
        ids::REASON_REGISTRY_NOT_FOUND,
    )
    .with_flag(ids::FLAG_REGISTRY_UNVERIFIED)];
    receipt(
        asset("LAND-NG-999"),
        ScreeningOutcome::Verdict(Verdict::reconcile(&evidence, UnknownPolicy::Deny)),
        "0c4e77d1",
    )
}

pub(crate) fn invalid_wallet() -> ScreeningReceipt {
    receipt(
        Subject::Wallet {
            address: "0xabc".to_string(),
        },
        ScreeningOutcome::ValidationFailed(ValidationFailure::new(
            Field::Address,
            ValidationError::LengthOutOfRange,
        )),
        "e3a1",
    )
}

pub(crate) fn unavailable_wallet() -> ScreeningReceipt {
    receipt(
        wallet(),
        ScreeningOutcome::Unavailable(ScreeningUnavailable {
            source: EvidenceSource::Reputation,
            kind: UnavailableKind::Timeout,
            detail: "reputation provider did not answer within 5000ms".to_string(),
        }),
        "77aa",
    )
}
