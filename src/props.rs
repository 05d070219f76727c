//! Input surface for the widget: props, placeholders, and locale text.
//!
//! Mirrors what a presentation layer hands to the core on every input
//! change. The four mandatory fields are `Option`s so that an absent field
//! is distinguishable from a present-but-empty one; absence is a
//! configuration error, emptiness is a normal display state.

use crate::issuer::Issuer;

/// The glyph used to mask unfilled digit positions in number and expiry
/// displays.
pub const STAR: char = '•';

/// Placeholder text shown when a field has no input yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeholders {
    /// Cardholder name placeholder.
    pub name: String,
    /// Expiry month placeholder (shown when the whole expiry is empty).
    pub expiry_month: String,
    /// Expiry year placeholder (shown when the whole expiry is empty).
    pub expiry_year: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            name: "YOUR NAME HERE".to_string(),
            expiry_month: "••".to_string(),
            expiry_year: "••".to_string(),
        }
    }
}

/// Localizable label text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    /// Label shown next to the expiry date.
    pub valid: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            valid: "valid thru".to_string(),
        }
    }
}

/// Raw input values for one render of the card face.
///
/// `number`, `name`, `expiry` and `cvc` are mandatory: they must be `Some`
/// (possibly `Some("")`) or [`crate::widget::CardFace::render`] fails with a
/// configuration error. Everything else has a usable default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProps {
    /// Raw card number input. Numeric inputs should be stringified first.
    pub number: Option<String>,
    /// Cardholder name input.
    pub name: Option<String>,
    /// Raw expiry input, `"MM/YY"` or compact `"MMYY"`.
    pub expiry: Option<String>,
    /// CVC input, passed through to the rendering untouched.
    pub cvc: Option<String>,
    /// Allow-list of issuers; empty means all known issuers are accepted.
    pub accepted_cards: Vec<Issuer>,
    /// Placeholder text overrides.
    pub placeholders: Placeholders,
    /// Label text overrides.
    pub locale: Locale,
    /// Preview mode: relaxes numeric validation so static demo values
    /// render unmodified, and honors the `issuer` override.
    pub preview: bool,
    /// Issuer tag override, only honored in preview mode.
    pub issuer: Option<String>,
}

impl CardProps {
    /// Builds props with all four mandatory fields present.
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            number: Some(number.into()),
            name: Some(name.into()),
            expiry: Some(expiry.into()),
            cvc: Some(cvc.into()),
            ..Self::default()
        }
    }

    /// Names of the mandatory fields that are absent, in declaration order.
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.number.is_none() {
            missing.push("number");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.expiry.is_none() {
            missing.push("expiry");
        }
        if self.cvc.is_none() {
            missing.push("cvc");
        }
        missing
    }
}
