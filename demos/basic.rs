//! Basic card face rendering example.
//!
//! Run with: `cargo run --example basic`

use cardface::{CardFace, CardProps, Issuer};

fn main() {
    println!("=== Card Face Rendering ===\n");

    // Example 1: render a card as the user types
    let mut face = CardFace::new();
    let keystrokes = ["4", "42", "4242", "42424242", "4242424242424242"];

    println!("Typing a Visa number:");
    for typed in keystrokes {
        let props = CardProps::new(typed, "JANE DOE", "1230", "123");
        match face.render(&props) {
            Ok(rendering) => {
                let signal = match rendering.change {
                    Some((arg, valid)) => {
                        format!("-> change: {} (max {}, luhn {})", arg.issuer, arg.max_length, valid)
                    }
                    None => String::new(),
                };
                println!("  {:20} {}  {}", typed, rendering.number, signal);
            }
            Err(e) => println!("  error: {e}"),
        }
    }
    println!();

    // Example 2: different brands, different layouts
    println!("Brand-specific layouts:");
    let cards = [
        ("4242424242424242", "Visa"),
        ("5555555555554444", "Mastercard"),
        ("378282246310005", "American Express"),
        ("30569309025904", "Diners Club"),
        ("6011111111111117", "Discover"),
    ];

    for (number, label) in cards {
        let mut face = CardFace::new();
        let props = CardProps::new(number, "", "", "");
        if let Ok(rendering) = face.render(&props) {
            println!("  {:18} {:22} [{}]", label, rendering.number, rendering.issuer);
        }
    }
    println!();

    // Example 3: allow-lists
    println!("Allow-list restriction:");
    let mut face = CardFace::new();
    let mut props = CardProps::new("5555555555554444", "", "", "");
    props.accepted_cards = vec![Issuer::Visa];
    if let Ok(rendering) = face.render(&props) {
        println!(
            "  Mastercard number with visa-only allow-list resolves to: {}",
            rendering.issuer
        );
    }
}
