//! Fuzz target for address validation.
//!
//! The validator must never panic, and anything it accepts must be 26..=60 ASCII
//! alphanumerics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_address_validator
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(id) = argus_types::validate(text)
    {
        let s = id.as_str();
        assert!((argus_types::MIN_ADDRESS_LEN..=argus_types::MAX_ADDRESS_LEN).contains(&s.len()));
        assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
        assert_eq!(s, text);
    }
});
