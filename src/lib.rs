//! # cardface
//!
//! Display core for credit-card widgets: pure, synchronous transformations
//! from raw input strings to the masked display strings, issuer tag, and
//! Luhn validity a card face needs.
//!
//! Presentation (layout, CSS, framework state) lives outside this crate; it
//! calls in with raw prop values on every input change and paints whatever
//! comes back.
//!
//! ## Quick start
//!
//! ```rust
//! use cardface::{CardFace, CardProps, Issuer};
//!
//! let mut face = CardFace::new();
//! let props = CardProps::new("378282246310005", "J SMITH", "1230", "1234");
//! let rendering = face.render(&props).unwrap();
//!
//! assert_eq!(rendering.number, "3782 822463 10005");
//! assert_eq!(rendering.expiry, "12/30");
//! assert_eq!(rendering.issuer, Issuer::AmericanExpress);
//!
//! // The change signal fires once per distinct number, with Luhn validity
//! let (arg, is_valid) = rendering.change.unwrap();
//! assert_eq!(arg.max_length, 15);
//! assert!(is_valid);
//! ```
//!
//! ## Pieces
//!
//! The pipeline is three pure formatters plus a leaf checksum, all usable
//! on their own:
//!
//! ```rust
//! use cardface::{issuer, number, expiry, luhn, Placeholders, Issuer};
//!
//! let matched = issuer::match_issuer("4242");
//! assert_eq!(matched, Issuer::Visa);
//!
//! let display = number::format_number("4242", matched, matched.max_length(), false);
//! assert_eq!(display, "4242 •••• •••• ••••");
//!
//! let exp = expiry::format_expiry("12/2025", &Placeholders::default());
//! assert_eq!(exp, "12/25");
//!
//! assert!(luhn::validate_str("4242424242424242"));
//! ```
//!
//! ## Accept lists
//!
//! [`CardFace`] restricts resolvable issuers to an optional allow-list and
//! caches the restricted set until the list changes. A number whose network
//! is excluded renders with the generic 16-digit layout and reports
//! [`Issuer::Unknown`].
//!
//! ## Display widths
//!
//! | issuer | width |
//! |--------|-------|
//! | american-express | 15 |
//! | dinersclub | 14 |
//! | hipercard, mastercard, visa | 19 |
//! | everything else / unknown | 16 |
//!
//! Widths above 16 only open up once the input outgrows 16 digits, so the
//! mask does not over-pad while the issuer is still ambiguous.
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize issuer tags and callback payloads |
//! | `wasm` | WebAssembly bindings for browser hosts |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod expiry;
pub mod issuer;
pub mod luhn;
pub mod number;
pub mod props;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use error::ConfigError;
pub use issuer::{match_issuer, valid_issuers, Issuer, KNOWN_ISSUERS};
pub use props::{CardProps, Locale, Placeholders, STAR};
pub use widget::{CallbackArgument, CardFace, Rendering};
