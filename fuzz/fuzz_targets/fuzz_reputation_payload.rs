//! Fuzz target for reputation provider response bodies.
//!
//! Arbitrary bytes map to a report or `ProviderError::Malformed`, never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_reputation_payload
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(report) = argus_reputation::parse_report(data) {
        for finding in &report.findings {
            assert!(!finding.category.trim().is_empty());
        }
    }
});
