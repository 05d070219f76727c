//! WebAssembly bindings for the card display pipeline.
//!
//! Exposes the formatting functions to JavaScript hosts so web widgets can
//! reuse the exact same display logic.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { format_number, format_expiry, match_issuer, passes_luhn } from 'cardface';
//!
//! await init();
//!
//! format_number("4242", "visa", 19, false);   // "4242 •••• •••• ••••"
//! format_expiry("1225", "••", "••");          // "12/25"
//! match_issuer("378282246310005");            // "american-express"
//! passes_luhn("4242424242424242");            // true
//! known_issuers();                            // ["visa", "mastercard", ...]
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::issuer::Issuer;
use crate::props::Placeholders;

/// Detects the issuer of a card number and returns its tag.
///
/// Returns `"unknown"` when no prefix rule matches.
#[wasm_bindgen]
pub fn match_issuer(number: &str) -> String {
    crate::issuer::match_issuer(number).tag().to_string()
}

/// Returns the display width for an issuer tag (14, 15, 16, or 19).
#[wasm_bindgen]
pub fn max_length(issuer_tag: &str) -> usize {
    Issuer::from_tag(issuer_tag)
        .unwrap_or(Issuer::Unknown)
        .max_length()
}

/// Formats a raw number into the masked, grouped display string.
#[wasm_bindgen]
pub fn format_number(raw: &str, issuer_tag: &str, max_length: usize, preview: bool) -> String {
    let issuer = Issuer::from_tag(issuer_tag).unwrap_or(Issuer::Unknown);
    crate::number::format_number(raw, issuer, max_length, preview)
}

/// Formats a raw expiry input as `MM/YY` with the given placeholder text.
#[wasm_bindgen]
pub fn format_expiry(raw: &str, month_placeholder: &str, year_placeholder: &str) -> String {
    let placeholders = Placeholders {
        expiry_month: month_placeholder.to_string(),
        expiry_year: year_placeholder.to_string(),
        ..Placeholders::default()
    };
    crate::expiry::format_expiry(raw, &placeholders)
}

/// Checks a card number against the Luhn checksum.
#[wasm_bindgen]
pub fn passes_luhn(number: &str) -> bool {
    crate::luhn::validate_str(number)
}

/// Returns the tags of every issuer with a prefix rule, as a JS array.
///
/// Useful for building accept-list UIs on the JavaScript side.
#[wasm_bindgen]
pub fn known_issuers() -> js_sys::Array {
    crate::issuer::KNOWN_ISSUERS
        .iter()
        .map(|issuer| JsValue::from_str(issuer.tag()))
        .collect()
}
