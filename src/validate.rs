//! Main validation orchestration for card numbers.
//!
//! This module provides [`validate_card_number`], which runs the structural
//! checks, the Luhn checksum and provider classification in that order and
//! stops at the first failure.
//!
//! Validation is pure: no I/O, no logging, no shared mutable state. The same
//! input always produces the same result, and any number of threads may
//! validate concurrently.

use crate::card::CardInfo;
use crate::detect::{self, DEFAULT_BADGE_BASE_URL};
use crate::error::{InternalFailure, ServiceError, ValidationError, ValidationFailure};
use crate::{luhn, structure};

/// Validates card numbers and builds badge URLs under a configurable base.
///
/// `CardValidator::default()` uses [`DEFAULT_BADGE_BASE_URL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardValidator {
    badge_base_url: String,
}

impl CardValidator {
    /// Creates a validator serving badges from `badge_base_url`.
    pub fn new(badge_base_url: impl Into<String>) -> Self {
        Self {
            badge_base_url: badge_base_url.into(),
        }
    }

    /// Returns the badge base URL.
    pub fn badge_base_url(&self) -> &str {
        &self.badge_base_url
    }

    /// Validates a card number.
    ///
    /// # Returns
    ///
    /// * `Ok(CardInfo)` - the number as supplied, its provider and badge URL
    /// * `Err(ServiceError::Validation)` - the first violated rule, reported
    ///   against the `card_number` field
    /// * `Err(ServiceError::Internal)` - the provider table disagrees with the
    ///   structural checks; not reachable for any input
    ///
    /// # Example
    ///
    /// ```
    /// use cards_service::CardValidator;
    ///
    /// let validator = CardValidator::new("https://cdn.example.com/badges");
    /// let info = validator.validate("5555555555554444").unwrap();
    /// assert_eq!(info.provider_name(), "MASTERCARD");
    /// assert_eq!(info.provider_badge(), "https://cdn.example.com/badges/mastercard.png");
    /// ```
    pub fn validate(&self, card_number: &str) -> Result<CardInfo, ServiceError> {
        structure::check(card_number).map_err(reject)?;

        if !luhn::validate(card_number) {
            return Err(reject(ValidationError::ChecksumFailed));
        }

        let provider = detect::classify(card_number).map_err(|e| {
            InternalFailure::new(format!(
                "provider classification failed after structural checks passed: {}",
                e
            ))
        })?;

        Ok(CardInfo::new(
            card_number,
            provider,
            detect::badge_url(&self.badge_base_url, provider),
        ))
    }
}

impl Default for CardValidator {
    fn default() -> Self {
        Self::new(DEFAULT_BADGE_BASE_URL)
    }
}

fn reject(error: ValidationError) -> ServiceError {
    ServiceError::Validation(ValidationFailure::card_number(&error))
}

/// Validates a card number with the default badge base URL.
///
/// # Example
///
/// ```
/// use cards_service::validate_card_number;
///
/// let info = validate_card_number("4111111111111111").unwrap();
/// assert_eq!(info.provider_name(), "VISA");
/// assert!(info.provider_badge().ends_with("visa.png"));
///
/// let err = validate_card_number("4111111111111112").unwrap_err();
/// assert_eq!(err.as_validation().unwrap().reason(), "checksum_failed");
/// ```
pub fn validate_card_number(card_number: &str) -> Result<CardInfo, ServiceError> {
    CardValidator::default().validate(card_number)
}

/// Quickly checks if a card number is valid without returning detailed info.
///
/// # Example
///
/// ```
/// use cards_service::is_valid;
///
/// assert!(is_valid("378282246310005"));
/// assert!(!is_valid("378282246310006"));
/// ```
#[inline]
pub fn is_valid(card_number: &str) -> bool {
    structure::check(card_number).is_ok() && luhn::validate(card_number)
}

/// Checks only the Luhn checksum, ignoring prefix and length rules.
///
/// # Example
///
/// ```
/// use cards_service::passes_luhn;
///
/// assert!(passes_luhn("79927398713"));
/// assert!(!passes_luhn("79927398710"));
/// ```
#[inline]
pub fn passes_luhn(card_number: &str) -> bool {
    luhn::validate(card_number)
}
