//! The card face coordinator.
//!
//! [`CardFace`] owns the little state a card widget needs between renders:
//! the accepted-issuer set (recomputed only when the allow-list prop
//! changes) and the last emitted formatted number (so the change signal
//! fires once per distinct number, not once per render). Everything else is
//! recomputed from scratch on every call; rendering the same props twice
//! yields byte-identical display strings.

use zeroize::Zeroize;

use crate::error::ConfigError;
use crate::expiry::format_expiry;
use crate::issuer::{match_issuer, valid_issuers, Issuer};
use crate::luhn;
use crate::number::format_number;
use crate::props::CardProps;

/// Payload of the change signal: the resolved issuer and its display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CallbackArgument {
    /// The issuer resolved from the number (after allow-list restriction).
    pub issuer: Issuer,
    /// Display width for that issuer, one of {14, 15, 16, 19}.
    pub max_length: usize,
}

/// Everything the presentation layer needs to paint one frame of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Masked, grouped number display string.
    pub number: String,
    /// `MM/YY` expiry display string.
    pub expiry: String,
    /// Issuer selecting the visual skin (preview override applied).
    pub issuer: Issuer,
    /// Name display, falling back to the name placeholder.
    pub name: String,
    /// CVC input, passed through untouched.
    pub cvc: String,
    /// Label shown next to the expiry (e.g. "valid thru").
    pub valid_label: String,
    /// `Some` exactly when the formatted number differs from the previous
    /// render: the callback payload plus the Luhn validity of the raw
    /// number. Hosts forward this to their change callback.
    pub change: Option<(CallbackArgument, bool)>,
}

/// Stateful coordinator for one card widget instance.
///
/// # Example
///
/// ```
/// use cardface::{CardFace, CardProps, Issuer};
///
/// let mut face = CardFace::new();
/// let props = CardProps::new("4242424242424242", "J SMITH", "12/30", "123");
/// let rendering = face.render(&props).unwrap();
///
/// assert_eq!(rendering.number, "4242 4242 4242 4242");
/// assert_eq!(rendering.expiry, "12/30");
/// assert_eq!(rendering.issuer, Issuer::Visa);
/// let (arg, valid) = rendering.change.unwrap();
/// assert_eq!(arg.max_length, 19);
/// assert!(valid);
/// ```
#[derive(Debug, Clone)]
pub struct CardFace {
    /// Snapshot of the accept-list prop the cached set was computed from.
    accepted: Vec<Issuer>,
    /// Ordered set of issuers currently resolvable.
    valid_issuers: Vec<Issuer>,
    /// Formatted number emitted with the last change signal.
    last_number: Option<String>,
}

impl CardFace {
    /// Creates a coordinator with an unrestricted issuer set.
    pub fn new() -> Self {
        Self {
            accepted: Vec::new(),
            valid_issuers: valid_issuers(&[]),
            last_number: None,
        }
    }

    /// The ordered set of issuers the widget currently resolves to.
    pub fn valid_issuers(&self) -> &[Issuer] {
        &self.valid_issuers
    }

    /// Runs the full formatting pipeline for one set of props.
    ///
    /// Fails only when a mandatory prop (`number`, `name`, `expiry`, `cvc`)
    /// is absent; that is a wiring mistake, reported with every missing
    /// field named. Malformed input values never fail, they degrade to
    /// placeholder output.
    pub fn render(&mut self, props: &CardProps) -> Result<Rendering, ConfigError> {
        let (Some(number), Some(name), Some(expiry), Some(cvc)) =
            (&props.number, &props.name, &props.expiry, &props.cvc)
        else {
            return Err(ConfigError::MissingFields {
                fields: props.missing_fields(),
            });
        };

        if props.accepted_cards != self.accepted {
            self.accepted = props.accepted_cards.clone();
            self.valid_issuers = valid_issuers(&self.accepted);
        }

        // Resolve the issuer, subject to the accept list.
        let mut resolved = Issuer::Unknown;
        if !number.is_empty() {
            let matched = match_issuer(number);
            if self.valid_issuers.contains(&matched) {
                resolved = matched;
            }
        }
        let max_length = resolved.max_length();

        // Preview mode may force a skin regardless of the number.
        let skin = if props.preview {
            match props.issuer.as_deref() {
                Some(tag) => Issuer::from_tag(tag).unwrap_or(Issuer::Unknown),
                None => resolved,
            }
        } else {
            resolved
        };

        let display_max = if props.preview { 19 } else { max_length };
        let formatted = format_number(number, skin, display_max, props.preview);

        // Diff-and-notify: signal once per distinct formatted number.
        let change = if self.last_number.as_deref() != Some(formatted.as_str()) {
            self.last_number = Some(formatted.clone());

            let mut digits: Vec<u8> = number
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect();
            let is_valid = luhn::validate(&digits);
            digits.zeroize();

            Some((
                CallbackArgument {
                    issuer: resolved,
                    max_length,
                },
                is_valid,
            ))
        } else {
            None
        };

        let name = if name.is_empty() {
            props.placeholders.name.clone()
        } else {
            name.clone()
        };

        Ok(Rendering {
            number: formatted,
            expiry: format_expiry(expiry, &props.placeholders),
            issuer: skin,
            name,
            cvc: cvc.clone(),
            valid_label: props.locale.valid.clone(),
            change,
        })
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::new()
    }
}
