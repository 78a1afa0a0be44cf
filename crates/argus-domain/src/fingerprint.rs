use argus_types::ScreeningOutcome;
use sha2::{Digest, Sha256};

/// Stable digest of a subject and its outcome.
///
/// Identical subject and outcome always hash the same; timestamps are not included.
pub fn fingerprint_outcome(subject: &str, outcome: &ScreeningOutcome) -> String {
    let mut hasher = Sha256::new();
    hasher.update(subject.as_bytes());
    hasher.update([0u8]);
    hasher.update(outcome.label().as_bytes());
    hasher.update([0u8]);
    match outcome {
        ScreeningOutcome::Verdict(v) => {
            hasher.update(v.reason().as_bytes());
            for flag in v.flags() {
                hasher.update([0u8]);
                hasher.update(flag.as_bytes());
            }
        }
        ScreeningOutcome::ValidationFailed(f) => {
            hasher.update(f.field.as_str().as_bytes());
            hasher.update([0u8]);
            hasher.update(f.rule.code().as_bytes());
        }
        ScreeningOutcome::Unavailable(u) => {
            hasher.update(u.source.as_str().as_bytes());
            hasher.update([0u8]);
            hasher.update(u.kind.as_str().as_bytes());
        }
    }
    hex::encode(hasher.finalize())
}
