//! Preview-mode rendering example: static demo cards with forced skins.
//!
//! Run with: `cargo run --example preview`

use cardface::{CardFace, CardProps, Placeholders};

fn main() {
    println!("=== Preview Mode ===\n");

    // Static marketing-style values render unmodified instead of being
    // blanked by the numeric check.
    let mut face = CardFace::new();
    let mut props = CardProps::new("**** **** **** 4242", "YOUR NAME", "", "");
    props.preview = true;
    props.issuer = Some("visa".to_string());

    match face.render(&props) {
        Ok(rendering) => {
            println!("number: {}", rendering.number);
            println!("expiry: {}", rendering.expiry);
            println!("skin:   {}", rendering.issuer);
        }
        Err(e) => println!("error: {e}"),
    }
    println!();

    // Custom placeholders and locale text
    let mut face = CardFace::new();
    let mut props = CardProps::new("", "", "", "");
    props.placeholders = Placeholders {
        name: "NOME E SOBRENOME".to_string(),
        expiry_month: "MM".to_string(),
        expiry_year: "AA".to_string(),
    };
    props.locale.valid = "validade".to_string();

    if let Ok(rendering) = face.render(&props) {
        println!("localized empty card:");
        println!("  number: {}", rendering.number);
        println!("  expiry: {}", rendering.expiry);
        println!("  name:   {}", rendering.name);
        println!("  label:  {}", rendering.valid_label);
    }
}
