//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! Starting from the rightmost digit (index 0), every digit at an odd index
//! is doubled, and 9 is subtracted when the doubled value exceeds 9. The
//! number is valid when the sum of all digits is divisible by 10.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a card number string using the Luhn algorithm.
///
/// Embedded spaces are stripped first. Any other non-digit character makes
/// the number invalid, as does an input without digits.
///
/// # Example
///
/// ```
/// use cards_service::luhn;
///
/// assert!(luhn::validate("4111111111111111"));
/// assert!(luhn::validate("4111 1111 1111 1111"));
/// assert!(!luhn::validate("4111111111111112"));
/// assert!(!luhn::validate("4111-1111-1111-1111"));
/// ```
pub fn validate(card_number: &str) -> bool {
    let mut sum: u32 = 0;
    let mut seen = 0usize;

    for c in card_number.chars().rev().filter(|&c| c != ' ') {
        let digit = match c.to_digit(10) {
            Some(d) => d as u8,
            None => return false,
        };

        sum += if seen % 2 == 1 {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        seen += 1;
    }

    seen > 0 && sum % 10 == 0
}

/// Validates a slice of digits (0-9 values, not ASCII) using the Luhn algorithm.
///
/// # Example
///
/// ```
/// use cards_service::luhn::validate_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate_digits(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate_digits(&invalid));
/// ```
#[inline]
pub fn validate_digits(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// Digits above 9 are not accepted; callers pass values produced by
/// `char::to_digit(10)` or equivalent.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use cards_service::luhn::generate_check_digit;
///
/// // Visa test card without check digit
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Once the check digit is appended every existing digit moves one
    // position to the left, so even indices here become doubled ones.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
