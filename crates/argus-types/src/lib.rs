//! Stable DTOs and IDs used across the argus workspace.
//!
//! This crate is intentionally boring:
//! - the address validator and the `Identifier` it produces
//! - evidence, verdict and outcome shapes handed to callers
//! - stable flag strings and rule codes
//! - the receipt envelope written by the CLI
//! - explain registry for flags and validation rules

#![forbid(unsafe_code)]

pub mod address;
pub mod explain;
pub mod ids;
pub mod outcome;
pub mod receipt;
pub mod verdict;

pub use address::{Identifier, MAX_ADDRESS_LEN, MIN_ADDRESS_LEN, ValidationError, validate};
pub use explain::{Explanation, lookup_explanation};
pub use outcome::{
    Field, ScreeningOutcome, ScreeningUnavailable, UnavailableKind, ValidationFailure,
};
pub use receipt::{SCHEMA_RECEIPT_V1, ScreeningReceipt, Subject, ToolMeta};
pub use verdict::{Evidence, EvidenceSource, UnknownPolicy, Verdict, VerdictHint};
