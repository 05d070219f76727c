//! Fuzz target for Luhn validation.

#![no_main]

use cardface::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let plain = luhn::validate_str(data);
    // Separator-insensitivity
    let spaced: String = data.chars().flat_map(|c| [c, ' ']).collect();
    assert_eq!(plain, luhn::validate_str(&spaced));
});
