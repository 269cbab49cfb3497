//! Structural checks run before the checksum.
//!
//! Rules are applied in a fixed order and the first one that fails is
//! reported:
//!
//! 1. the input is not empty,
//! 2. the first character is a supported prefix (`3`, `4`, `5` or `6`),
//! 3. the input is 15 or 16 characters long,
//! 4. the length matches the network (only `3`/AMEX may have 15),
//! 5. every character other than a space is an ASCII digit.
//!
//! Lengths are counted on the input as supplied, spaces included.

use crate::detect::detect_provider;
use crate::error::ValidationError;

/// Shortest accepted card number, in characters.
pub const MIN_LENGTH: usize = 15;

/// Longest accepted card number, in characters.
pub const MAX_LENGTH: usize = 16;

/// Checks the shape of a card number.
///
/// # Example
///
/// ```
/// use cards_service::structure::check;
/// use cards_service::ValidationError;
///
/// assert!(check("4111111111111111").is_ok());
/// assert_eq!(
///     check("9111111111111111"),
///     Err(ValidationError::UnsupportedPrefix { character: '9' })
/// );
/// ```
pub fn check(card_number: &str) -> Result<(), ValidationError> {
    let first = card_number.chars().next().ok_or(ValidationError::Empty)?;

    let provider =
        detect_provider(first).ok_or(ValidationError::UnsupportedPrefix { character: first })?;

    let length = card_number.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidLength { length });
    }

    if length != provider.length() {
        return Err(ValidationError::InvalidLengthForProvider { provider, length });
    }

    for (position, character) in card_number.chars().enumerate() {
        if character != ' ' && !character.is_ascii_digit() {
            return Err(ValidationError::InvalidCharacter {
                position,
                character,
            });
        }
    }

    Ok(())
}
