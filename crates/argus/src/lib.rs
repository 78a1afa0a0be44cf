//! Trust verdicts for wallet addresses and tokenized real-world assets.
//!
//! This crate re-exports the engine surface so library users depend on one crate:
//! build a [`WalletScreeningEngine`] or [`AssetComplianceEngine`] over your own
//! [`ReputationProvider`] / [`TrustRegistry`] implementations and branch on the
//! returned [`ScreeningOutcome`].
//!
//! Transports, configuration files and the bundled HTTP/registry adapters live in the
//! `argus-app`, `argus-server` and `argus-cli` crates.

#![forbid(unsafe_code)]

pub use argus_domain::lifecycle::RequestState;
pub use argus_domain::policy::EnginePolicy;
pub use argus_domain::ports::{
    AssetRecord, AssetStatus, ProviderError, RegistryError, ReputationProvider,
    ReputationReport, RiskFinding, TrustRegistry,
};
pub use argus_domain::{AssetComplianceEngine, WalletScreeningEngine, fingerprint_outcome};
pub use argus_types::{
    Evidence, EvidenceSource, Field, Identifier, ScreeningOutcome, ScreeningUnavailable,
    UnavailableKind, UnknownPolicy, ValidationError, ValidationFailure, Verdict, VerdictHint,
    validate,
};

#[cfg(feature = "test-support")]
pub use argus_domain::testing;
