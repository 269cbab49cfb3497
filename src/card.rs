//! Core card types.
//!
//! This module provides the `Provider` enum for identifying card networks
//! and the `CardInfo` struct returned for a successfully validated number.

use std::fmt;
use zeroize::Zeroize;

/// Supported card networks.
///
/// The network is inferred from the first character of the card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// American Express - Prefix 3, length 15
    Amex,
    /// Visa - Prefix 4, length 16
    Visa,
    /// Mastercard - Prefix 5, length 16
    Mastercard,
    /// Discover - Prefix 6, length 16
    Discover,
}

impl Provider {
    /// All supported providers, in prefix order.
    pub const ALL: [Provider; 4] = [
        Provider::Amex,
        Provider::Visa,
        Provider::Mastercard,
        Provider::Discover,
    ];

    /// Returns the provider name as reported to callers.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Amex => "AMEX",
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::Discover => "DISCOVER",
        }
    }

    /// Returns the lower-cased name used for the badge file.
    #[inline]
    pub const fn badge_name(&self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Discover => "discover",
        }
    }

    /// Returns the only card number length accepted for this provider.
    #[inline]
    pub const fn length(&self) -> usize {
        match self {
            Self::Amex => 15,
            Self::Visa | Self::Mastercard | Self::Discover => 16,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The result of a successful validation.
///
/// The card number is echoed back exactly as supplied. It is zeroed when
/// the value is dropped and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct CardInfo {
    card_number: String,
    provider: Provider,
    provider_badge: String,
}

impl CardInfo {
    /// Creates a new `CardInfo`.
    ///
    /// Internal constructor; use [`validate_card_number`](crate::validate_card_number)
    /// to obtain instances.
    #[inline]
    pub(crate) fn new(card_number: &str, provider: Provider, provider_badge: String) -> Self {
        Self {
            card_number: card_number.to_string(),
            provider,
            provider_badge,
        }
    }

    /// Returns the card number as supplied by the caller.
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Never log it; use `masked()` instead.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Returns the detected provider.
    #[inline]
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the provider name, e.g. `VISA`.
    #[inline]
    pub const fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Returns the URL of the provider badge.
    #[inline]
    pub fn provider_badge(&self) -> &str {
        &self.provider_badge
    }

    /// Returns the card number with all but the last four digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card_number(&self.card_number)
    }
}

impl fmt::Debug for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInfo")
            .field("card_number", &self.masked())
            .field("provider", &self.provider)
            .field("provider_badge", &self.provider_badge)
            .finish()
    }
}

impl Drop for CardInfo {
    fn drop(&mut self) {
        self.card_number.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::Visa.name(), "VISA");
        assert_eq!(Provider::Amex.to_string(), "AMEX");
        for provider in Provider::ALL {
            assert_eq!(provider.badge_name(), provider.name().to_lowercase());
        }
    }

    #[test]
    fn test_provider_lengths() {
        assert_eq!(Provider::Amex.length(), 15);
        assert_eq!(Provider::Visa.length(), 16);
        assert_eq!(Provider::Mastercard.length(), 16);
        assert_eq!(Provider::Discover.length(), 16);
    }

    #[test]
    fn test_card_info_accessors() {
        let info = CardInfo::new(
            "4111111111111111",
            Provider::Visa,
            "https://dummy.com/card-provider-icons/visa.png".to_string(),
        );
        assert_eq!(info.card_number(), "4111111111111111");
        assert_eq!(info.provider(), Provider::Visa);
        assert_eq!(info.provider_name(), "VISA");
        assert!(info.provider_badge().ends_with("visa.png"));
    }

    #[test]
    fn test_debug_is_masked() {
        let info = CardInfo::new("4111111111111111", Provider::Visa, String::new());
        let debug = format!("{:?}", info);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("1111"));
        assert!(debug.contains("Visa"));
    }

    #[test]
    fn test_card_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardInfo>();
        assert_send_sync::<Provider>();
    }
}
