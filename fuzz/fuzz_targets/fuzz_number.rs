//! Fuzz target for number display formatting.
//!
//! Formatting must never panic and must keep the masked width invariant.

#![no_main]

use cardface::{number::format_number, Issuer, KNOWN_ISSUERS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for &issuer in KNOWN_ISSUERS {
        let out = format_number(data, issuer, issuer.max_length(), false);
        let width = out.chars().filter(|c| *c != ' ').count();
        assert!(matches!(width, 14 | 15 | 16 | 19));

        let _ = format_number(data, issuer, issuer.max_length(), true);
    }

    let _ = format_number(data, Issuer::Unknown, 16, false);
    let _ = format_number(data, Issuer::Unknown, 19, true);
});
