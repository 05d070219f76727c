//! Error types for the card display core.
//!
//! Only one failure ever crosses the core boundary: missing mandatory props
//! at setup, which is a programmer error. Malformed input (non-numeric
//! number strings, odd expiry values) never fails; it degrades to
//! placeholder-filled output, and an unrecognized issuer simply resolves to
//! `unknown`.

use std::fmt;

/// Configuration errors raised when the widget is wired up incorrectly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more mandatory props (`number`, `name`, `expiry`, `cvc`) were
    /// not supplied. Lists every absent field.
    MissingFields {
        /// Names of the absent fields, in declaration order.
        fields: Vec<&'static str>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "missing mandatory prop(s): {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ConfigError {}
