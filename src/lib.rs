//! # cards_service
//!
//! Card number validation engine, with an optional RPC server and CLI.
//!
//! ## Features
//!
//! - Provider detection from the leading digit (AMEX, VISA, MASTERCARD, DISCOVER)
//! - Length rules per network (15 for AMEX, 16 for the others)
//! - Luhn checksum validation
//! - Structured errors separating caller mistakes from internal faults
//! - Card number masking for logs
//!
//! ## Quick Start
//!
//! ```rust
//! use cards_service::{validate_card_number, Provider};
//!
//! let info = validate_card_number("4111111111111111").unwrap();
//! assert_eq!(info.provider(), Provider::Visa);
//! assert_eq!(info.provider_name(), "VISA");
//! assert_eq!(
//!     info.provider_badge(),
//!     "https://dummy.com/card-provider-icons/visa.png"
//! );
//!
//! // Debug never prints the full number
//! assert!(!format!("{:?}", info).contains("4111111111111111"));
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use cards_service::{validate_card_number, ServiceError};
//!
//! match validate_card_number("9111111111111111") {
//!     Err(ServiceError::Validation(failure)) => {
//!         let violation = &failure.violations()[0];
//!         assert_eq!(violation.field, "card_number");
//!         assert_eq!(violation.reason, "unsupported_prefix");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! ## Supported Providers
//!
//! | Provider | Prefix | Length |
//! |----------|--------|--------|
//! | AMEX | 3 | 15 |
//! | VISA | 4 | 16 |
//! | MASTERCARD | 5 | 16 |
//! | DISCOVER | 6 | 16 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for field violations |
//! | `cli` | Command-line tool (`cardcheck`) |
//! | `server` | JSON RPC server with Swagger UI (`cards-service`) |
//!
//! ## Security
//!
//! - Card numbers are only held for the duration of one call
//! - `CardInfo` zeroizes its number on drop
//! - `Debug` output is masked
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
#[cfg(feature = "server")]
pub mod config;
pub mod detect;
pub mod error;
pub mod luhn;
pub mod mask;
#[cfg(feature = "server")]
pub mod server;
pub mod structure;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardInfo, Provider};
pub use error::{FieldViolation, InternalFailure, ServiceError, ValidationError, ValidationFailure};
pub use validate::{is_valid, passes_luhn, validate_card_number, CardValidator};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA: &str = "4111111111111111";
    const VISA_2: &str = "4012888888881881";
    const MASTERCARD: &str = "5555555555554444";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";

    fn reason(input: &str) -> String {
        match validate_card_number(input) {
            Err(ServiceError::Validation(failure)) => failure.reason().to_string(),
            other => panic!("Expected validation failure for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_visa_validation() {
        let info = validate_card_number(VISA).unwrap();
        assert_eq!(info.provider(), Provider::Visa);
        assert!(info.provider_badge().ends_with("visa.png"));

        let info = validate_card_number(VISA_2).unwrap();
        assert_eq!(info.provider(), Provider::Visa);
    }

    #[test]
    fn test_amex_validation() {
        let info = validate_card_number(AMEX).unwrap();
        assert_eq!(info.provider(), Provider::Amex);
        assert_eq!(info.card_number(), AMEX);
    }

    #[test]
    fn test_mastercard_and_discover_validation() {
        assert_eq!(
            validate_card_number(MASTERCARD).unwrap().provider(),
            Provider::Mastercard
        );
        assert_eq!(
            validate_card_number(DISCOVER).unwrap().provider(),
            Provider::Discover
        );
    }

    #[test]
    fn test_invalid_checksum() {
        assert_eq!(reason("4111111111111112"), "checksum_failed");
    }

    #[test]
    fn test_unsupported_prefix() {
        assert_eq!(reason("9111111111111111"), "unsupported_prefix");
    }

    #[test]
    fn test_too_short() {
        assert_eq!(reason("4111111111111"), "invalid_length");
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(reason("6011abcd11111117"), "invalid_characters");
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(VISA));
        assert!(is_valid(MASTERCARD));
        assert!(is_valid(AMEX));
        assert!(!is_valid("4111111111111112"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardInfo>();
        assert_send_sync::<ServiceError>();
        assert_send_sync::<Provider>();
        assert_send_sync::<CardValidator>();
    }
}
