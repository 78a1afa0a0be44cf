//! Evidence and the verdict reconciled from it.

use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceSource {
    Reputation,
    Registry,
}

impl EvidenceSource {
    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceSource::Reputation => ids::SOURCE_REPUTATION,
            EvidenceSource::Registry => ids::SOURCE_REGISTRY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerdictHint {
    Clean,
    Risky,
    Unknown,
}

/// How `Unknown` evidence counts toward the verdict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Unknown evidence does not block a safe verdict.
    #[default]
    Permit,
    /// Absence of proof is not proof of safety: any unknown evidence makes the verdict unsafe.
    Deny,
}

/// One signal from one source. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Evidence {
    source: EvidenceSource,
    hint: VerdictHint,
    weight: f64,
    detail: String,
    flag: Option<String>,
}

impl Evidence {
    /// Non-finite or negative weights are stored as `0.0`.
    pub fn new(
        source: EvidenceSource,
        hint: VerdictHint,
        weight: f64,
        detail: impl Into<String>,
    ) -> Self {
        let weight = if weight.is_finite() && weight >= 0.0 {
            weight
        } else {
            0.0
        };
        Self {
            source,
            hint,
            weight,
            detail: detail.into(),
            flag: None,
        }
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn source(&self) -> EvidenceSource {
        self.source
    }

    pub fn hint(&self) -> VerdictHint {
        self.hint
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }
}

/// The decision handed back to callers.
///
/// Wire shape: `{ "isSafe": bool, "reason": string, "flags": [string] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    is_safe: bool,
    reason: String,
    flags: Vec<String>,
}

impl Verdict {
    /// Reconcile gathered evidence into a single verdict.
    ///
    /// - any `Risky` evidence makes the verdict unsafe; the reason is the detail of the
    ///   heaviest risky evidence (earliest wins ties)
    /// - `Unknown` evidence makes it unsafe under [`UnknownPolicy::Deny`]
    /// - no evidence at all is never safe
    /// - flags keep arrival order, duplicates dropped
    pub fn reconcile(evidence: &[Evidence], unknown: UnknownPolicy) -> Verdict {
        let mut flags: Vec<String> = Vec::new();
        for flag in evidence.iter().filter_map(Evidence::flag) {
            if !flags.iter().any(|f| f == flag) {
                flags.push(flag.to_string());
            }
        }

        if let Some(dominant) = dominant_risk(evidence) {
            let mut others: Vec<&str> = Vec::new();
            for e in evidence.iter().filter(|e| e.hint == VerdictHint::Risky) {
                let key = e.flag().unwrap_or(e.detail());
                if std::ptr::eq(e, dominant) || key == dominant.flag().unwrap_or(dominant.detail())
                {
                    continue;
                }
                if !others.contains(&key) {
                    others.push(key);
                }
            }
            let reason = match others.len() {
                0 => dominant.detail.clone(),
                1 => format!("{} (+1 more risk signal)", dominant.detail),
                n => format!("{} (+{n} more risk signals)", dominant.detail),
            };
            return Verdict {
                is_safe: false,
                reason,
                flags,
            };
        }

        if unknown == UnknownPolicy::Deny
            && let Some(first_unknown) = evidence.iter().find(|e| e.hint == VerdictHint::Unknown)
        {
            return Verdict {
                is_safe: false,
                reason: first_unknown.detail.clone(),
                flags,
            };
        }

        let Some(first) = evidence
            .iter()
            .find(|e| e.hint == VerdictHint::Clean)
            .or_else(|| evidence.first())
        else {
            return Verdict {
                is_safe: false,
                reason: ids::REASON_NO_EVIDENCE.to_string(),
                flags,
            };
        };

        Verdict {
            is_safe: true,
            reason: first.detail.clone(),
            flags,
        }
    }

    pub fn is_safe(&self) -> bool {
        self.is_safe
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }
}

fn dominant_risk(evidence: &[Evidence]) -> Option<&Evidence> {
    let mut best: Option<&Evidence> = None;
    for e in evidence.iter().filter(|e| e.hint == VerdictHint::Risky) {
        match best {
            Some(b) if e.weight <= b.weight => {}
            _ => best = Some(e),
        }
    }
    best
}
