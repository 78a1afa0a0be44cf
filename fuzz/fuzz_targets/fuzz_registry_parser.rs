//! Fuzz target for trust registry documents (TOML and JSON).
//!
//! Parsing and indexing may reject input, never panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_registry_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(doc) = argus_registry::parse_registry_toml(text) {
            let _ = argus_registry::StaticTrustRegistry::from_document(doc);
        }
        if let Ok(doc) = argus_registry::parse_registry_json(text) {
            let _ = argus_registry::StaticTrustRegistry::from_document(doc);
        }
    }
});
