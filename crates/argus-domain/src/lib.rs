//! Trust verdict engines (no transport, no configuration files).
//!
//! Input: a raw identifier plus injected evidence sources.
//! Output: a [`ScreeningOutcome`]: a verdict, a validation failure, or an explicit
//! "screening unavailable".
//!
//! Evidence source lookups are spawned onto the tokio runtime, so engines must be driven
//! from inside one.

#![forbid(unsafe_code)]

pub mod evidence;
pub mod lifecycle;
pub mod policy;
pub mod ports;

mod asset;
mod fingerprint;
mod gather;
mod wallet;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use argus_types::{ScreeningOutcome, Verdict};
pub use asset::AssetComplianceEngine;
pub use fingerprint::fingerprint_outcome;
pub use wallet::WalletScreeningEngine;
