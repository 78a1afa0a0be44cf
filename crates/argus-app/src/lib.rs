//! Use case orchestration for argus.
//!
//! The application layer wires engines from settings and turns outcomes into receipts.
//! The CLI and the HTTP server both sit on top of it and only handle their own I/O.

#![forbid(unsafe_code)]

mod engines;
mod explain;
mod receipt;
mod screen;
mod settings;

pub use engines::{Engines, api_key_from_env};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use receipt::{parse_receipt_json, serialize_receipt, write_receipt, write_text};
pub use screen::{VerifyInput, outcome_exit_code, run_scan, run_verify};
pub use settings::load_settings;
