//! Masking utilities for card numbers.
//!
//! Card numbers must never reach logs in full. These helpers keep only the
//! last four digits (and optionally the leading six) and work on raw,
//! unvalidated input as well, since rejected numbers get logged too.

/// Masks a card number showing only the last 4 digits.
///
/// Non-digit characters are dropped before masking. Inputs with 4 digits
/// or fewer are masked entirely.
///
/// # Example
///
/// ```
/// use cards_service::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4111111111111111"), "****-****-****-1111");
/// assert_eq!(mask_card_number("378282246310005"), "****-****-***0005");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Separator before last 4 only on a group boundary
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&digits[len - 4..]);
    result
}

/// Masks a card number showing the BIN (first 6) and last 4 digits.
///
/// Format: `411111******1111`. Falls back to [`mask_card_number`] when
/// there are 10 digits or fewer.
///
/// # Example
///
/// ```
/// use cards_service::mask::mask_with_bin;
///
/// assert_eq!(mask_with_bin("4111111111111111"), "411111******1111");
/// ```
pub fn mask_with_bin(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 10 {
        return mask_card_number(input);
    }

    let mut result = String::with_capacity(len);
    result.extend(&digits[..6]);
    result.extend(std::iter::repeat('*').take(len - 10));
    result.extend(&digits[len - 4..]);
    result
}

/// Extracts the last 4 digits from a card number string.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
