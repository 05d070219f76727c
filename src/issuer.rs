//! Card issuer detection using BIN/IIN prefix matching.
//!
//! The first digits of a card number identify the issuing network. Detection
//! walks a static, ordered rule table and returns the first issuer whose
//! prefix pattern matches; order resolves overlapping ranges (Elo 509 before
//! Maestro 50, Discover 65 before the Maestro 6x catch-all, Hipercard 3841
//! before Diners Club 38).
//!
//! The table is immutable and built into the binary; nothing mutates it at
//! runtime.

use std::fmt;

/// Card issuer networks recognized by the widget.
///
/// Each issuer carries a stable kebab-case tag used by presentation layers
/// to select a visual skin (e.g. a CSS class suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Issuer {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720
    Mastercard,
    /// American Express - prefix 34, 37
    AmericanExpress,
    /// Diners Club - prefix 300-305, 309, 36, 38
    #[cfg_attr(feature = "serde", serde(rename = "dinersclub"))]
    DinersClub,
    /// Discover - prefix 6011, 644-649, 65
    Discover,
    /// Hipercard - Brazilian network, prefix 606282, 637095, 637568, 3841
    Hipercard,
    /// JCB - prefix 3528-3589
    Jcb,
    /// UnionPay - prefix 62
    #[cfg_attr(feature = "serde", serde(rename = "unionpay"))]
    UnionPay,
    /// Maestro - prefix 50, 56-69 (where no other network claims the range)
    Maestro,
    /// Elo - Brazilian network, prefix 509, 6362, 6363
    Elo,
    /// No known network matched, or the matched network was excluded by the
    /// accept list.
    Unknown,
}

/// All known issuers in declaration order, excluding [`Issuer::Unknown`].
pub const KNOWN_ISSUERS: &[Issuer] = &[
    Issuer::Visa,
    Issuer::Mastercard,
    Issuer::AmericanExpress,
    Issuer::DinersClub,
    Issuer::Discover,
    Issuer::Hipercard,
    Issuer::Jcb,
    Issuer::UnionPay,
    Issuer::Maestro,
    Issuer::Elo,
];

impl Issuer {
    /// Returns the kebab-case tag for this issuer.
    ///
    /// Tags are stable and suitable as class-name suffixes for visual
    /// skins: `"visa"`, `"american-express"`, `"dinersclub"`, ...
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::AmericanExpress => "american-express",
            Self::DinersClub => "dinersclub",
            Self::Discover => "discover",
            Self::Hipercard => "hipercard",
            Self::Jcb => "jcb",
            Self::UnionPay => "unionpay",
            Self::Maestro => "maestro",
            Self::Elo => "elo",
            Self::Unknown => "unknown",
        }
    }

    /// Parses an issuer from its tag, case-insensitively.
    ///
    /// Returns `None` for unrecognized tags (including `"unknown"` itself,
    /// which is not a real network).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        KNOWN_ISSUERS.iter().copied().find(|i| i.tag() == tag)
    }

    /// Returns the maximum number of digits displayed for this issuer.
    ///
    /// Always one of {14, 15, 16, 19}; this drives the masked display width
    /// and grouping, not acceptance of input.
    #[inline]
    pub const fn max_length(&self) -> usize {
        match self {
            Self::AmericanExpress => 15,
            Self::DinersClub => 14,
            Self::Hipercard | Self::Mastercard | Self::Visa => 19,
            _ => 16,
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One entry of the detection table: an issuer and its prefix matcher.
struct IssuerRule {
    issuer: Issuer,
    matches: fn(&[u8]) -> bool,
}

/// The ordered detection table. First match wins.
///
/// Hipercard must precede Diners Club (3841 vs 38), Elo must precede Maestro
/// (509 vs 50), and Discover/UnionPay/Elo must all precede the Maestro 6x
/// catch-all.
const RULES: &[IssuerRule] = &[
    IssuerRule { issuer: Issuer::Hipercard, matches: is_hipercard },
    IssuerRule { issuer: Issuer::AmericanExpress, matches: is_american_express },
    IssuerRule { issuer: Issuer::DinersClub, matches: is_dinersclub },
    IssuerRule { issuer: Issuer::Jcb, matches: is_jcb },
    IssuerRule { issuer: Issuer::Visa, matches: is_visa },
    IssuerRule { issuer: Issuer::Mastercard, matches: is_mastercard },
    IssuerRule { issuer: Issuer::Elo, matches: is_elo },
    IssuerRule { issuer: Issuer::Discover, matches: is_discover },
    IssuerRule { issuer: Issuer::UnionPay, matches: is_unionpay },
    IssuerRule { issuer: Issuer::Maestro, matches: is_maestro },
];

fn is_hipercard(d: &[u8]) -> bool {
    matches!(
        d,
        [6, 0, 6, 2, 8, 2, ..] | [6, 3, 7, 0, 9, 5, ..] | [6, 3, 7, 5, 6, 8, ..] | [3, 8, 4, 1, ..]
    )
}

fn is_american_express(d: &[u8]) -> bool {
    matches!(d, [3, 4, ..] | [3, 7, ..])
}

fn is_dinersclub(d: &[u8]) -> bool {
    matches!(d, [3, 0, 0..=5, ..] | [3, 0, 9, ..] | [3, 6, ..] | [3, 8, ..])
}

fn is_jcb(d: &[u8]) -> bool {
    // 3528-3589
    matches!(d, [3, 5, 2, 8..=9, ..] | [3, 5, 3..=8, _, ..])
}

fn is_visa(d: &[u8]) -> bool {
    matches!(d, [4, ..])
}

fn is_mastercard(d: &[u8]) -> bool {
    matches!(
        d,
        [5, 1..=5, ..]           // 51-55
        | [2, 2, 2, 1..=9, ..]   // 2221-2229
        | [2, 2, 3..=9, _, ..]   // 2230-2299
        | [2, 3..=6, _, _, ..]   // 2300-2699
        | [2, 7, 0..=1, _, ..]   // 2700-2719
        | [2, 7, 2, 0, ..]       // 2720
    )
}

fn is_elo(d: &[u8]) -> bool {
    matches!(d, [5, 0, 9, ..] | [6, 3, 6, 2..=3, ..])
}

fn is_discover(d: &[u8]) -> bool {
    matches!(d, [6, 0, 1, 1, ..] | [6, 4, 4..=9, ..] | [6, 5, ..])
}

fn is_unionpay(d: &[u8]) -> bool {
    matches!(d, [6, 2, ..])
}

fn is_maestro(d: &[u8]) -> bool {
    matches!(d, [5, 0, ..] | [5, 6..=8, ..] | [6, ..])
}

/// Detects the card issuer from a raw number string.
///
/// Non-digit characters are ignored, so formatted input (`"4242 4242 ..."`)
/// and stringified numeric input both work. Returns [`Issuer::Unknown`] when
/// no rule matches, which is the normal outcome for short or garbage input,
/// never an error.
///
/// # Example
///
/// ```
/// use cardface::issuer::{match_issuer, Issuer};
///
/// assert_eq!(match_issuer("378282246310005"), Issuer::AmericanExpress);
/// assert_eq!(match_issuer("4242 4242 4242 4242"), Issuer::Visa);
/// assert_eq!(match_issuer("1234"), Issuer::Unknown);
/// ```
pub fn match_issuer(number: &str) -> Issuer {
    let digits: Vec<u8> = number
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&digits))
        .map(|rule| rule.issuer)
        .unwrap_or(Issuer::Unknown)
}

/// Restricts the matcher's universe to an accept list.
///
/// An empty accept list means "accept everything": the full ordered
/// [`KNOWN_ISSUERS`] set is returned. Otherwise the result is the ordered
/// intersection; issuers matched by prefix but absent from this set resolve
/// to [`Issuer::Unknown`] in the widget.
///
/// The widget caches the result and recomputes it only when the accept list
/// itself changes, so unrelated re-renders do no extra work.
pub fn valid_issuers(accepted: &[Issuer]) -> Vec<Issuer> {
    if accepted.is_empty() {
        return KNOWN_ISSUERS.to_vec();
    }

    KNOWN_ISSUERS
        .iter()
        .copied()
        .filter(|i| accepted.contains(i))
        .collect()
}
