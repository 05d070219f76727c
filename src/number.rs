//! Masked card-number display formatting.
//!
//! Produces the grouped, glyph-padded string shown on the card face. Real
//! digits always form a contiguous prefix; unfilled positions are rendered
//! as [`STAR`] so the display keeps a fixed width while the user types.
//!
//! # Grouping conventions
//!
//! - American Express / Diners Club: `4-6-5` (Diners, at width 14, shows
//!   `4-6-4` because the last group runs out of characters)
//! - 19-digit displays: `4-4-4-7`
//! - everything else: groups of 4

use crate::issuer::Issuer;
use crate::props::STAR;

/// Formats a raw number input into the masked display string.
///
/// `max_length` is the display width for the resolved issuer (one of
/// {14, 15, 16, 19}); widths above 16 are capped back to 16 while the input
/// still fits in 16 digits, so short numbers are not over-padded before the
/// issuer is fully known.
///
/// Letters and spaces are stripped from the input (digits never are). Input
/// that does not start like an integer is blanked to all-glyphs, unless
/// `preview` is set, which lets demo values flow through unmodified.
///
/// Excluding separator spaces, the output length always equals the
/// effective max length.
///
/// # Example
///
/// ```
/// use cardface::number::format_number;
/// use cardface::issuer::Issuer;
///
/// assert_eq!(
///     format_number("", Issuer::Unknown, 16, false),
///     "•••• •••• •••• ••••"
/// );
/// assert_eq!(
///     format_number("378282246310005", Issuer::AmericanExpress, 15, false),
///     "3782 822463 10005"
/// );
/// ```
pub fn format_number(raw: &str, issuer: Issuer, max_length: usize, preview: bool) -> String {
    let mut cleaned: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() && *c != ' ')
        .collect();

    if !looks_like_integer(&cleaned) && !preview {
        cleaned.clear();
    }

    // Keep short numbers at the common 16 width until they outgrow it.
    let mut effective_max = max_length;
    if effective_max > 16 && cleaned.len() <= 16 {
        effective_max = 16;
    }

    cleaned.truncate(effective_max);
    while cleaned.len() < effective_max {
        cleaned.push(STAR);
    }

    if issuer == Issuer::AmericanExpress || issuer == Issuer::DinersClub {
        // 4-6-5 at offsets 0, 4, 10
        [slice(&cleaned, 0, 4), slice(&cleaned, 4, 6), slice(&cleaned, 10, 5)].join(" ")
    } else if cleaned.len() > 16 {
        // 4-4-4-7 at offsets 0, 4, 8, 12
        [
            slice(&cleaned, 0, 4),
            slice(&cleaned, 4, 4),
            slice(&cleaned, 8, 4),
            slice(&cleaned, 12, 7),
        ]
        .join(" ")
    } else {
        // Standard groups of 4: insert a space after each group, with each
        // insertion offset accounting for the spaces already inserted.
        for i in 1..effective_max.div_ceil(4) {
            let space_index = i * 4 + (i - 1);
            if space_index <= cleaned.len() {
                cleaned.insert(space_index, ' ');
            }
        }
        cleaned.into_iter().collect()
    }
}

/// Takes up to `count` characters starting at `start`, clamped to the
/// available length (JavaScript `substr` semantics).
fn slice(chars: &[char], start: usize, count: usize) -> String {
    let start = start.min(chars.len());
    let end = (start + count).min(chars.len());
    chars[start..end].iter().collect()
}

/// Whether `parseInt` would accept this: optional sign, then a digit.
fn looks_like_integer(chars: &[char]) -> bool {
    match chars {
        ['+' | '-', rest @ ..] => rest.first().is_some_and(|c| c.is_ascii_digit()),
        [first, ..] => first.is_ascii_digit(),
        [] => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_full_mask() {
        assert_eq!(
            format_number("", Issuer::Unknown, 16, false),
            "•••• •••• •••• ••••"
        );
    }

    #[test]
    fn test_garbage_input_blanked() {
        assert_eq!(
            format_number("garbage", Issuer::Unknown, 16, false),
            "•••• •••• •••• ••••"
        );
    }

    #[test]
    fn test_garbage_passes_through_in_preview() {
        // Preview mode skips the integer check; "**** ...." style demo
        // values render as typed (letters and spaces still stripped).
        let out = format_number("****1234", Issuer::Unknown, 16, true);
        assert_eq!(out, "**** 1234 •••• ••••");
    }

    #[test]
    fn test_full_visa_16() {
        assert_eq!(
            format_number("4242424242424242", Issuer::Visa, 19, false),
            "4242 4242 4242 4242"
        );
    }

    #[test]
    fn test_partial_number_padded() {
        assert_eq!(
            format_number("42", Issuer::Visa, 19, false),
            "42•• •••• •••• ••••"
        );
    }

    #[test]
    fn test_19_digit_grouping() {
        // Past 16 digits the width opens up to 19 with 4-4-4-7 groups
        assert_eq!(
            format_number("42424242424242425", Issuer::Visa, 19, false),
            "4242 4242 4242 42425••"
        );
        assert_eq!(
            format_number("4242424242424242424", Issuer::Visa, 19, false),
            "4242 4242 4242 4242424"
        );
    }

    #[test]
    fn test_amex_grouping() {
        assert_eq!(
            format_number("378282246310005", Issuer::AmericanExpress, 15, false),
            "3782 822463 10005"
        );
        assert_eq!(
            format_number("37", Issuer::AmericanExpress, 15, false),
            "37•• •••••• •••••"
        );
    }

    #[test]
    fn test_dinersclub_grouping() {
        // Width 14 leaves only 4 characters for the last 4-6-5 group
        assert_eq!(
            format_number("30569309025904", Issuer::DinersClub, 14, false),
            "3056 930902 5904"
        );
    }

    #[test]
    fn test_truncates_past_max() {
        assert_eq!(
            format_number("4242424242424242999", Issuer::Discover, 16, false),
            "4242 4242 4242 4242"
        );
    }

    #[test]
    fn test_strips_letters_and_spaces() {
        assert_eq!(
            format_number("4242 4242 4242 4242", Issuer::Visa, 19, false),
            "4242 4242 4242 4242"
        );
        assert_eq!(
            format_number("42ab42", Issuer::Visa, 19, false),
            "4242 •••• •••• ••••"
        );
    }

    #[test]
    fn test_digit_preservation() {
        for input in ["4", "42", "424242", "4242424242424242", "42424242424242424"] {
            let issuer = crate::issuer::match_issuer(input);
            let out = format_number(input, issuer, issuer.max_length(), false);
            let digits: String = out.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(digits, input, "digits must survive formatting");
        }
    }

    #[test]
    fn test_width_excluding_spaces() {
        for (input, max, want) in [
            ("", 16, 16),
            ("4242", 19, 16),
            ("42424242424242424", 19, 19),
            ("3056930902", 14, 14),
        ] {
            let out = format_number(input, crate::issuer::match_issuer(input), max, false);
            let width = out.chars().filter(|c| *c != ' ').count();
            assert_eq!(width, want, "input {:?}", input);
        }
    }
}
