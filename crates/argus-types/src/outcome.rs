//! The tagged result of a screening request.
//!
//! Three disjoint outcomes that callers must branch on explicitly: a caller error, an
//! evidence source that could not be consulted, or a verdict. "Could not check" is never
//! representable as "checked and clean".

use crate::address::ValidationError;
use crate::verdict::{EvidenceSource, Verdict};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input field a validation failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Address,
    Issuer,
    AssetId,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::Issuer => "issuer",
            Field::AssetId => "assetId",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub field: Field,
    pub rule: ValidationError,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: Field, rule: ValidationError) -> Self {
        let message = match (field, rule) {
            (Field::AssetId, _) => "asset id is empty".to_string(),
            (_, rule) => rule.to_string(),
        };
        Self {
            field,
            rule,
            reason: format!("invalid {field} ({}): {message}", rule.code()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UnavailableKind {
    /// The source did not answer within the configured timeout.
    Timeout,
    /// Connection, TLS or DNS failure.
    Transport,
    /// The source answered with a non-success status.
    Status,
    /// The source answered with a body that could not be understood.
    Malformed,
    /// The trust registry could not be read.
    Registry,
}

impl UnavailableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UnavailableKind::Timeout => "timeout",
            UnavailableKind::Transport => "transport",
            UnavailableKind::Status => "status",
            UnavailableKind::Malformed => "malformed",
            UnavailableKind::Registry => "registry",
        }
    }
}

/// An evidence source could not be consulted. Retry is at the caller's discretion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningUnavailable {
    pub source: EvidenceSource,
    pub kind: UnavailableKind,
    pub detail: String,
}

impl fmt::Display for ScreeningUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unavailable ({}): {}",
            self.source.as_str(),
            self.kind.as_str(),
            self.detail
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ScreeningOutcome {
    Verdict(Verdict),
    ValidationFailed(ValidationFailure),
    Unavailable(ScreeningUnavailable),
}

impl ScreeningOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            ScreeningOutcome::Verdict(v) => Some(v),
            _ => None,
        }
    }

    /// `true` only for a verdict that says safe.
    pub fn is_safe(&self) -> bool {
        self.verdict().is_some_and(Verdict::is_safe)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScreeningOutcome::Verdict(v) if v.is_safe() => "safe",
            ScreeningOutcome::Verdict(_) => "unsafe",
            ScreeningOutcome::ValidationFailed(_) => "validation-failed",
            ScreeningOutcome::Unavailable(_) => "unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{Evidence, UnknownPolicy, VerdictHint};

    #[test]
    fn validation_reason_names_field_and_rule() {
        let f = ValidationFailure::new(Field::Issuer, ValidationError::LengthOutOfRange);
        assert_eq!(
            f.reason,
            "invalid issuer (length-out-of-range): address length must be between 26 and 60 characters"
        );

        let f = ValidationFailure::new(Field::AssetId, ValidationError::Empty);
        assert_eq!(f.reason, "invalid assetId (empty): asset id is empty");
    }

    #[test]
    fn only_safe_verdicts_are_safe() {
        let unavailable = ScreeningOutcome::Unavailable(ScreeningUnavailable {
            source: EvidenceSource::Reputation,
            kind: UnavailableKind::Timeout,
            detail: "no answer within 5000ms".to_string(),
        });
        assert!(!unavailable.is_safe());
        assert_eq!(unavailable.label(), "unavailable");

        let invalid = ScreeningOutcome::ValidationFailed(ValidationFailure::new(
            Field::Address,
            ValidationError::Empty,
        ));
        assert!(!invalid.is_safe());

        let clean = Evidence::new(EvidenceSource::Reputation, VerdictHint::Clean, 1.0, "ok");
        let safe = ScreeningOutcome::Verdict(Verdict::reconcile(&[clean], UnknownPolicy::Permit));
        assert!(safe.is_safe());
        assert_eq!(safe.label(), "safe");
    }

    #[test]
    fn outcome_is_internally_tagged() {
        let outcome = ScreeningOutcome::Unavailable(ScreeningUnavailable {
            source: EvidenceSource::Registry,
            kind: UnavailableKind::Registry,
            detail: "registry offline".to_string(),
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "unavailable");
        assert_eq!(json["source"], "registry");
        assert_eq!(json["kind"], "registry");

        let back: ScreeningOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn unavailable_display() {
        let u = ScreeningUnavailable {
            source: EvidenceSource::Reputation,
            kind: UnavailableKind::Status,
            detail: "HTTP 502".to_string(),
        };
        assert_eq!(u.to_string(), "reputation unavailable (status): HTTP 502");
    }
}
