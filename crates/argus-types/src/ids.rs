//! Stable identifiers for flags and validation rules.
//!
//! Flags are emitted in verdicts; rule codes name the validation rule that rejected an input.
//! Reputation categories are passed through verbatim from the provider and are not listed here.

// Registry flags
pub const FLAG_REGISTRY_UNTRUSTED_ISSUER: &str = "registry:untrusted-issuer";
pub const FLAG_REGISTRY_UNVERIFIED: &str = "registry:unverified";

/// Prefix applied to reputation categories reported for an asset issuer.
pub const FLAG_PREFIX_ISSUER: &str = "issuer:";

// Validation rules
pub const RULE_EMPTY: &str = "empty";
pub const RULE_MALFORMED_CHARACTERS: &str = "malformed-characters";
pub const RULE_LENGTH_OUT_OF_RANGE: &str = "length-out-of-range";

// Evidence sources
pub const SOURCE_REPUTATION: &str = "reputation";
pub const SOURCE_REGISTRY: &str = "registry";

// Canonical reasons
pub const REASON_REGISTRY_VERIFIED: &str = "Issuer and asset verified against registry.";
pub const REASON_REGISTRY_NOT_FOUND: &str = "No registry record found for issuer/asset pair";
pub const REASON_REPUTATION_CLEAN: &str = "No risk signals reported for this address.";
pub const REASON_NO_EVIDENCE: &str = "No evidence source was consulted.";
