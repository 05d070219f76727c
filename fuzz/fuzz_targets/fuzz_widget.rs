//! Fuzz target for the full widget pipeline.

#![no_main]

use cardface::{CardFace, CardProps};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, &str, &str)| {
    let (number, name, expiry, cvc) = input;
    let mut face = CardFace::new();
    let props = CardProps::new(number, name, expiry, cvc);

    // Present props must never fail, and re-rendering must be stable
    let first = face.render(&props).unwrap();
    let second = face.render(&props).unwrap();
    assert_eq!(first.number, second.number);
    assert_eq!(first.expiry, second.expiry);
});
