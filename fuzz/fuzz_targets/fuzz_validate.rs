//! Fuzz target for card validation.
//!
//! Tests that validation never panics on arbitrary input and that its
//! stages agree with each other.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cards_service::{detect, is_valid, passes_luhn, structure, validate_card_number, ServiceError};

fuzz_target!(|data: &str| {
    let result = validate_card_number(data);

    // Internal failures are never caused by input
    assert!(!matches!(result, Err(ServiceError::Internal(_))));

    match &result {
        Ok(info) => {
            assert_eq!(info.card_number(), data);
            assert!(structure::check(data).is_ok());
            assert!(passes_luhn(data));
            assert_eq!(detect::classify(data).ok(), Some(info.provider()));
        }
        Err(_) => assert!(!is_valid(data)),
    }

    // Same input, same result
    assert_eq!(result, validate_card_number(data));
});
