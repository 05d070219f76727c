//! Expiry date display formatting.
//!
//! Parses raw expiry input leniently and renders the `MM/YY` slot on the
//! card face. This is display-only: no plausibility checks, so month 13-99
//! renders as typed. Accepts `MM/YY` and compact `MMYY` input; whichever
//! part is missing falls back to placeholder text or glyph padding.

use crate::props::{Placeholders, STAR};

/// Formats a raw expiry input as `"MM/YY"`.
///
/// - Input containing `'/'` is split at the first occurrence into
///   month/year; otherwise the first 2 characters are the month and the
///   rest is the year (compact `MMYY` entry).
/// - A year longer than 2 characters keeps the slice starting at index 2
///   (up to 4 characters). For a 4-digit year this drops the century, so
///   `"2025"` becomes `"25"`. Legacy rule, kept verbatim for compatibility;
///   do not replace with last-2-digits truncation.
/// - When month and year are both empty, both take their placeholder text
///   (the year unpadded). Otherwise short parts are padded on the right
///   with [`STAR`] to width 2. A separately empty month still gets its
///   placeholder even when the year has input.
///
/// # Example
///
/// ```
/// use cardface::expiry::format_expiry;
/// use cardface::props::Placeholders;
///
/// let ph = Placeholders::default();
/// assert_eq!(format_expiry("", &ph), "••/••");
/// assert_eq!(format_expiry("1225", &ph), "12/25");
/// assert_eq!(format_expiry("12/2025", &ph), "12/25");
/// assert_eq!(format_expiry("1", &ph), "1•/••");
/// ```
pub fn format_expiry(raw: &str, placeholders: &Placeholders) -> String {
    let mut month: String;
    let mut year: String;

    if let Some((m, y)) = raw.split_once('/') {
        month = m.to_string();
        year = y.to_string();
    } else if !raw.is_empty() {
        let chars: Vec<char> = raw.chars().collect();
        month = chars.iter().take(2).collect();
        year = chars.iter().skip(2).collect();
    } else {
        month = String::new();
        year = String::new();
    }

    if year.chars().count() > 2 {
        // Legacy substr(2, 4): skip the first two characters, keep at most
        // four. Happens to strip the century off 4-digit years.
        year = year.chars().skip(2).take(4).collect();
    }

    if month.is_empty() && year.is_empty() {
        year = placeholders.expiry_year.clone();
    } else {
        while year.chars().count() < 2 {
            year.push(STAR);
        }
    }

    // Checked after the year so a separately empty month is placeheld even
    // when the year had real input.
    if month.is_empty() {
        month = placeholders.expiry_month.clone();
    } else {
        while month.chars().count() < 2 {
            month.push(STAR);
        }
    }

    format!("{month}/{year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Placeholders {
        Placeholders::default()
    }

    #[test]
    fn test_empty_uses_placeholders() {
        assert_eq!(format_expiry("", &defaults()), "••/••");
    }

    #[test]
    fn test_custom_placeholders() {
        let ph = Placeholders {
            expiry_month: "MM".to_string(),
            expiry_year: "YY".to_string(),
            ..Placeholders::default()
        };
        assert_eq!(format_expiry("", &ph), "MM/YY");
    }

    #[test]
    fn test_slash_separated() {
        assert_eq!(format_expiry("12/25", &defaults()), "12/25");
        assert_eq!(format_expiry("03/30", &defaults()), "03/30");
    }

    #[test]
    fn test_compact_mmyy() {
        assert_eq!(format_expiry("1225", &defaults()), "12/25");
    }

    #[test]
    fn test_four_digit_year_drops_century() {
        assert_eq!(format_expiry("12/2025", &defaults()), "12/25");
        assert_eq!(format_expiry("122025", &defaults()), "12/25");
    }

    #[test]
    fn test_three_digit_year_legacy_slice() {
        // substr(2, 4) on "202" keeps just "2", then pads
        assert_eq!(format_expiry("12/202", &defaults()), "12/2•");
    }

    #[test]
    fn test_partial_input_padded() {
        assert_eq!(format_expiry("1", &defaults()), "1•/••");
        assert_eq!(format_expiry("12", &defaults()), "12/••");
        assert_eq!(format_expiry("122", &defaults()), "12/2•");
        assert_eq!(format_expiry("1/5", &defaults()), "1•/5•");
    }

    #[test]
    fn test_empty_month_with_year() {
        // Year present: it gets padding, while the month still falls back
        // to its placeholder.
        assert_eq!(format_expiry("/25", &defaults()), "••/25");
        assert_eq!(format_expiry("/5", &defaults()), "••/5•");
    }

    #[test]
    fn test_no_plausibility_checks() {
        // Display-only: impossible months render as typed
        assert_eq!(format_expiry("13/99", &defaults()), "13/99");
        assert_eq!(format_expiry("99/00", &defaults()), "99/00");
    }
}
