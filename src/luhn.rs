//! Luhn checksum validation for card numbers.
//!
//! The Luhn algorithm (the "modulus 10" algorithm) catches single-digit entry
//! errors in card numbers. The widget uses it only for the change-callback
//! validity signal, never for display.
//!
//! # Performance
//!
//! This implementation uses a lookup table for the doubling operation,
//! making it O(n) with minimal overhead.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// This avoids the branch and division in the inner loop.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a sequence of digits using the Luhn algorithm.
///
/// An empty slice sums to 0 and therefore passes. Callers that consider an
/// empty number invalid must branch on emptiness themselves; the widget
/// relies on this exact behavior for its callback signal.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cardface::luhn::validate;
///
/// // Valid Visa test card
/// let digits = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2];
/// assert!(validate(&digits));
///
/// // Invalid card (changed last digit)
/// let invalid = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 3];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let len = digits.len();
    let mut sum: u32 = 0;

    // Process from right to left.
    // The rightmost digit is position 0 (not doubled),
    // position 1 is doubled, position 2 is not, etc.
    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];

        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    sum
}

/// Validates a card number string using the Luhn algorithm.
///
/// Non-digit characters are ignored; only the ASCII digits contribute to the
/// checksum. A string with no digits at all passes trivially (checksum 0).
///
/// # Example
///
/// ```
/// use cardface::luhn::validate_str;
///
/// assert!(validate_str("4242424242424242"));
/// assert!(!validate_str("4242424242424243"));
/// assert!(validate_str("4242 4242 4242 4242"));
/// ```
#[inline]
pub fn validate_str(number: &str) -> bool {
    let digits: Vec<u8> = number
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    validate(&digits)
}
