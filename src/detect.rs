//! Provider classification by card number prefix.
//!
//! The provider is determined by the first character of the card number
//! alone, through a constant lookup table.
//!
//! # Performance
//!
//! Detection is a scan over four entries - no allocation, no hashing.

use crate::error::ValidationError;
use crate::Provider;

/// Base URL under which provider badge images are served.
pub const DEFAULT_BADGE_BASE_URL: &str = "https://dummy.com/card-provider-icons";

/// Maps a one-character prefix to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderRule {
    /// The leading character of the card number.
    pub prefix: char,
    /// The provider for numbers starting with `prefix`.
    pub provider: Provider,
}

/// The prefix table. Never mutated, shared freely between threads.
pub const PROVIDER_RULES: [ProviderRule; 4] = [
    ProviderRule {
        prefix: '3',
        provider: Provider::Amex,
    },
    ProviderRule {
        prefix: '4',
        provider: Provider::Visa,
    },
    ProviderRule {
        prefix: '5',
        provider: Provider::Mastercard,
    },
    ProviderRule {
        prefix: '6',
        provider: Provider::Discover,
    },
];

/// Detects the provider from the leading character of a card number.
///
/// # Example
///
/// ```
/// use cards_service::detect::detect_provider;
/// use cards_service::Provider;
///
/// assert_eq!(detect_provider('4'), Some(Provider::Visa));
/// assert_eq!(detect_provider('3'), Some(Provider::Amex));
/// assert_eq!(detect_provider('9'), None);
/// ```
#[inline]
pub fn detect_provider(prefix: char) -> Option<Provider> {
    PROVIDER_RULES
        .iter()
        .find(|rule| rule.prefix == prefix)
        .map(|rule| rule.provider)
}

/// Classifies a card number by its first character.
///
/// Safe to call on untrusted input: an empty string or an unknown prefix
/// yields [`ValidationError::UnknownProvider`].
///
/// # Example
///
/// ```
/// use cards_service::detect::classify;
/// use cards_service::{Provider, ValidationError};
///
/// assert_eq!(classify("5555555555554444"), Ok(Provider::Mastercard));
/// assert_eq!(classify("7111111111111111"), Err(ValidationError::UnknownProvider));
/// ```
pub fn classify(card_number: &str) -> Result<Provider, ValidationError> {
    card_number
        .chars()
        .next()
        .and_then(detect_provider)
        .ok_or(ValidationError::UnknownProvider)
}

/// Builds the badge URL for a provider: `<base>/<lowercased-name>.png`.
///
/// A trailing slash on `base_url` is ignored.
///
/// # Example
///
/// ```
/// use cards_service::detect::{badge_url, DEFAULT_BADGE_BASE_URL};
/// use cards_service::Provider;
///
/// assert_eq!(
///     badge_url(DEFAULT_BADGE_BASE_URL, Provider::Visa),
///     "https://dummy.com/card-provider-icons/visa.png"
/// );
/// ```
pub fn badge_url(base_url: &str, provider: Provider) -> String {
    format!(
        "{}/{}.png",
        base_url.trim_end_matches('/'),
        provider.badge_name()
    )
}
