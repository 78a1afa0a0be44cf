use argus_types::{ScreeningOutcome, ScreeningReceipt, Subject};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Safe,
    Unsafe,
    Invalid,
    Unavailable,
}

impl RenderableStatus {
    pub fn label(self) -> &'static str {
        match self {
            RenderableStatus::Safe => "SAFE",
            RenderableStatus::Unsafe => "UNSAFE",
            RenderableStatus::Invalid => "INVALID",
            RenderableStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

/// Flattened view of a receipt; renderers only read this.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReceipt {
    pub status: RenderableStatus,
    pub subject_kind: &'static str,
    pub subject: String,
    pub declared_value: Option<f64>,
    pub reason: String,
    /// Verdict flags, or the violated rule code for invalid input.
    pub flags: Vec<String>,
    pub duration_ms: u64,
    pub fingerprint: String,
}

impl RenderableReceipt {
    pub fn from_receipt(receipt: &ScreeningReceipt) -> Self {
        let (subject_kind, subject, declared_value) = match &receipt.subject {
            Subject::Wallet { address } => ("wallet", address.clone(), None),
            Subject::Asset {
                asset_id,
                issuer,
                declared_value,
            } => ("asset", format!("{asset_id} by {issuer}"), Some(*declared_value)),
        };

        let (status, reason, flags) = match &receipt.outcome {
            ScreeningOutcome::Verdict(v) => (
                if v.is_safe() {
                    RenderableStatus::Safe
                } else {
                    RenderableStatus::Unsafe
                },
                v.reason().to_string(),
                v.flags().to_vec(),
            ),
            ScreeningOutcome::ValidationFailed(f) => (
                RenderableStatus::Invalid,
                f.reason.clone(),
                vec![f.rule.code().to_string()],
            ),
            ScreeningOutcome::Unavailable(u) => {
                (RenderableStatus::Unavailable, u.to_string(), Vec::new())
            }
        };

        Self {
            status,
            subject_kind,
            subject,
            declared_value,
            reason,
            flags,
            duration_ms: receipt.duration_ms,
            fingerprint: receipt.fingerprint.clone(),
        }
    }
}
