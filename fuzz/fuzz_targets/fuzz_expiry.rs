//! Fuzz target for expiry formatting.

#![no_main]

use cardface::{expiry::format_expiry, Placeholders};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let out = format_expiry(data, &Placeholders::default());
    // Always month/year joined by at least one slash
    assert!(out.contains('/'));
});
