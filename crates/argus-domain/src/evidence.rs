//! Mapping raw source answers into [`Evidence`].

use crate::ports::{AssetRecord, AssetStatus, ReputationReport};
use argus_types::{Evidence, EvidenceSource, VerdictHint, ids};

const UNCATEGORIZED: &str = "uncategorized";

/// Who the reputation report is about; drives reason wording and flag prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReputationSubject {
    Wallet,
    Issuer,
}

/// One `Risky` evidence per flagged category, or a single `Clean` evidence when the
/// provider found nothing. Categories keep the provider's order.
pub fn from_reputation(report: &ReputationReport, subject: ReputationSubject) -> Vec<Evidence> {
    if report.findings.is_empty() {
        return vec![Evidence::new(
            EvidenceSource::Reputation,
            VerdictHint::Clean,
            1.0,
            ids::REASON_REPUTATION_CLEAN,
        )];
    }

    report
        .findings
        .iter()
        .map(|finding| {
            let category = match finding.category.trim() {
                "" => UNCATEGORIZED,
                c => c,
            };
            let (detail, flag) = match subject {
                ReputationSubject::Wallet => (
                    format!("Address flagged by reputation provider: {category}"),
                    category.to_string(),
                ),
                ReputationSubject::Issuer => (
                    format!("Issuer flagged by reputation provider: {category}"),
                    format!("{}{category}", ids::FLAG_PREFIX_ISSUER),
                ),
            };
            Evidence::new(
                EvidenceSource::Reputation,
                VerdictHint::Risky,
                finding.severity.unwrap_or(1.0),
                detail,
            )
            .with_flag(flag)
        })
        .collect()
}

pub fn from_registry(record: &AssetRecord) -> Evidence {
    match record.status {
        AssetStatus::Trusted => Evidence::new(
            EvidenceSource::Registry,
            VerdictHint::Clean,
            1.0,
            ids::REASON_REGISTRY_VERIFIED,
        ),
        AssetStatus::Untrusted => {
            let detail = match record.concern.as_deref().map(str::trim) {
                Some(concern) if !concern.is_empty() => {
                    format!("Registry marks issuer as untrusted: {concern}")
                }
                _ => "Registry marks issuer as untrusted".to_string(),
            };
            Evidence::new(EvidenceSource::Registry, VerdictHint::Risky, 1.0, detail)
                .with_flag(ids::FLAG_REGISTRY_UNTRUSTED_ISSUER)
        }
        AssetStatus::NotFound => Evidence::new(
            EvidenceSource::Registry,
            VerdictHint::Unknown,
            1.0,
            ids::REASON_REGISTRY_NOT_FOUND,
        )
        .with_flag(ids::FLAG_REGISTRY_UNVERIFIED),
    }
}
