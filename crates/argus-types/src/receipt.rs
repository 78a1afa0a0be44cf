use crate::outcome::ScreeningOutcome;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for screening receipts.
pub const SCHEMA_RECEIPT_V1: &str = "argus.receipt.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// What was screened, as the caller supplied it (raw, before validation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Subject {
    #[serde(rename_all = "camelCase")]
    Wallet { address: String },
    #[serde(rename_all = "camelCase")]
    Asset {
        asset_id: String,
        issuer: String,
        /// Passed through for auditing; never affects the outcome.
        declared_value: f64,
    },
}

impl Subject {
    /// Canonical `|`-joined form used for fingerprinting.
    pub fn canonical(&self) -> String {
        match self {
            Subject::Wallet { address } => format!("wallet|{address}"),
            Subject::Asset {
                asset_id, issuer, ..
            } => format!("asset|{asset_id}|{issuer}"),
        }
    }
}

/// Audit envelope around one outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReceipt {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_ms: u64,
    pub subject: Subject,
    pub outcome: ScreeningOutcome,
    /// SHA-256 over the canonical subject and outcome; equal decisions share it.
    pub fingerprint: String,
}
