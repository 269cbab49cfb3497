//! Integration tests for cards_service.
//!
//! These tests cover the documented scenarios, edge cases, and security
//! considerations of the public API.

use cards_service::{
    detect, is_valid, luhn, mask, passes_luhn, structure, validate_card_number, CardValidator,
    Provider, ServiceError, ValidationError,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test card numbers from payment processors. They pass Luhn
// validation but are not real cards.

mod test_cards {
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4012888888881881";
    pub const VISA_3: &str = "4242424242424242";

    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";
    pub const AMEX_3: &str = "340000000000009";

    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6011000990139424";
}

fn reason_of(input: &str) -> String {
    match validate_card_number(input) {
        Err(ServiceError::Validation(failure)) => failure.reason().to_string(),
        other => panic!("{:?} should be rejected, got {:?}", input, other),
    }
}

// =============================================================================
// DOCUMENTED SCENARIOS
// =============================================================================

#[test]
fn test_scenario_visa_succeeds() {
    let info = validate_card_number("4111111111111111").unwrap();
    assert_eq!(info.provider_name(), "VISA");
    assert!(info.provider_badge().ends_with("visa.png"));
}

#[test]
fn test_scenario_amex_succeeds() {
    let info = validate_card_number("378282246310005").unwrap();
    assert_eq!(info.provider_name(), "AMEX");
}

#[test]
fn test_scenario_checksum_failed() {
    let err = validate_card_number("4111111111111112").unwrap_err();
    let failure = err.as_validation().unwrap();
    assert_eq!(failure.reason(), "checksum_failed");
    assert!(failure.violations()[0].description.contains("checksum failed"));
}

#[test]
fn test_scenario_unsupported_prefix() {
    let err = validate_card_number("9111111111111111").unwrap_err();
    let violation = &err.as_validation().unwrap().violations()[0];
    assert_eq!(violation.reason, "unsupported_prefix");
    assert!(violation.description.contains("unsupported prefix"));
}

#[test]
fn test_scenario_invalid_length() {
    let err = validate_card_number("4111111111111").unwrap_err();
    let violation = &err.as_validation().unwrap().violations()[0];
    assert_eq!(violation.reason, "invalid_length");
    assert!(violation.description.contains("invalid length"));
}

#[test]
fn test_scenario_invalid_characters() {
    let err = validate_card_number("6011abcd11111117").unwrap_err();
    let violation = &err.as_validation().unwrap().violations()[0];
    assert_eq!(violation.reason, "invalid_characters");
    assert!(violation.description.contains("invalid characters"));
}

// =============================================================================
// VALID CARDS
// =============================================================================

#[test]
fn test_all_valid_test_cards() {
    let cases = [
        (test_cards::VISA_1, Provider::Visa),
        (test_cards::VISA_2, Provider::Visa),
        (test_cards::VISA_3, Provider::Visa),
        (test_cards::MC_1, Provider::Mastercard),
        (test_cards::MC_2, Provider::Mastercard),
        (test_cards::AMEX_1, Provider::Amex),
        (test_cards::AMEX_2, Provider::Amex),
        (test_cards::AMEX_3, Provider::Amex),
        (test_cards::DISCOVER_1, Provider::Discover),
        (test_cards::DISCOVER_2, Provider::Discover),
    ];

    for (card, provider) in cases {
        let result = validate_card_number(card);
        assert!(result.is_ok(), "{} should be valid: {:?}", card, result);

        let info = result.unwrap();
        assert_eq!(info.provider(), provider);
        assert_eq!(info.card_number(), card, "number is echoed unchanged");
        assert_eq!(
            info.provider_badge(),
            format!(
                "https://dummy.com/card-provider-icons/{}.png",
                provider.name().to_lowercase()
            )
        );
    }
}

// =============================================================================
// INVALID CARDS
// =============================================================================

#[test]
fn test_rejected_cards() {
    let cases = [
        ("123456789012345", "unsupported_prefix"),
        ("4111111111111", "invalid_length"),
        ("37828224631000", "invalid_length"),
        ("4111111111111112", "checksum_failed"),
        ("6011abcd11111117", "invalid_characters"),
        ("9111111111111111", "unsupported_prefix"),
        ("3245678901234561", "invalid_length"),
    ];

    for (card, reason) in cases {
        assert_eq!(reason_of(card), reason, "card {}", card);
    }
}

#[test]
fn test_empty_input_is_required() {
    assert_eq!(reason_of(""), "required");
}

#[test]
fn test_luhn_valid_but_wrong_length_for_network() {
    // Passes Luhn, 16 digits, but prefix 3 demands 15
    assert!(passes_luhn("3530111333300000"));
    assert_eq!(reason_of("3530111333300000"), "invalid_length");

    // Passes Luhn, 15 digits, but only AMEX may have 15
    assert!(passes_luhn("411111111111116"));
    assert_eq!(reason_of("411111111111116"), "invalid_length");
}

#[test]
fn test_other_networks_are_unsupported() {
    // Mastercard 2-series and prefixes outside the table
    assert_eq!(reason_of("2223000048400011"), "unsupported_prefix");
    assert_eq!(reason_of("8111111111111111"), "unsupported_prefix");
    assert_eq!(reason_of("0000000000000000"), "unsupported_prefix");
}

// =============================================================================
// INPUT FORMAT TESTS
// =============================================================================

#[test]
fn test_grouped_number_fails_length() {
    // Spaces count toward the structural length
    assert_eq!(reason_of("4111 1111 1111 1111"), "invalid_length");
    assert_eq!(reason_of("3782 822463 10005"), "invalid_length");
}

#[test]
fn test_separators_other_than_space_are_invalid() {
    assert_eq!(reason_of("4111-11111111111"), "invalid_characters");
    assert_eq!(reason_of("4111.11111111111"), "invalid_characters");
    assert_eq!(reason_of("4111\t11111111111"), "invalid_characters");
}

#[test]
fn test_leading_whitespace_is_not_a_prefix() {
    assert_eq!(reason_of(" 411111111111111"), "unsupported_prefix");
    assert_eq!(reason_of("\n411111111111111"), "unsupported_prefix");
}

#[test]
fn test_unicode_input() {
    assert_eq!(reason_of("４１１１１１１１１１１１１１１１"), "unsupported_prefix");
    assert_eq!(reason_of("411111111111111€"), "invalid_characters");
    assert_eq!(reason_of("🎉111111111111111"), "unsupported_prefix");
}

// =============================================================================
// RULE ORDER
// =============================================================================

#[test]
fn test_first_failing_rule_is_reported() {
    // Bad prefix and bad length: prefix wins
    assert_eq!(reason_of("9"), "unsupported_prefix");
    // Bad length and bad characters: length wins
    assert_eq!(reason_of("4abc"), "invalid_length");
    // Bad characters and bad checksum: characters win
    assert_eq!(reason_of("4x11111111111112"), "invalid_characters");
}

#[test]
fn test_structure_then_luhn_then_classify() {
    let card = test_cards::DISCOVER_2;
    assert_eq!(structure::check(card), Ok(()));
    assert!(luhn::validate(card));
    assert_eq!(detect::classify(card), Ok(Provider::Discover));
    assert!(is_valid(card));
}

// =============================================================================
// ERROR MODEL
// =============================================================================

#[test]
fn test_error_kinds_are_distinguishable() {
    match validate_card_number("4111111111111112") {
        Err(ServiceError::Validation(failure)) => {
            assert_eq!(failure.violations().len(), 1);
            assert_eq!(failure.violations()[0].field, "card_number");
        }
        Err(ServiceError::Internal(failure)) => panic!("unexpected internal error: {}", failure),
        Ok(info) => panic!("unexpected success: {:?}", info),
    }
}

#[test]
fn test_classifier_rejects_unknown_prefix_directly() {
    assert_eq!(
        detect::classify("7111111111111111"),
        Err(ValidationError::UnknownProvider)
    );
}

#[test]
fn test_error_display_mentions_field() {
    let err = validate_card_number("9111111111111111").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("validation error(s)"));
    assert!(message.contains("card_number"));
}

// =============================================================================
// PURITY & CONCURRENCY
// =============================================================================

#[test]
fn test_repeated_calls_are_identical() {
    for card in [
        test_cards::VISA_1,
        test_cards::AMEX_1,
        "4111111111111112",
        "",
        "6011abcd11111117",
    ] {
        let first = validate_card_number(card);
        let second = validate_card_number(card);
        assert_eq!(first, second, "card {}", card);
    }
}

#[test]
fn test_concurrent_validation() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let (card, expected) = if i % 2 == 0 {
                    (test_cards::VISA_1, Provider::Visa)
                } else {
                    (test_cards::AMEX_1, Provider::Amex)
                };
                (0..1000).all(|_| validate_card_number(card).unwrap().provider() == expected)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_shared_validator_across_threads() {
    let validator = std::sync::Arc::new(CardValidator::new("https://cdn.example.com/icons"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = validator.clone();
            std::thread::spawn(move || validator.validate(test_cards::MC_1).unwrap())
        })
        .collect();

    for handle in handles {
        let info = handle.join().unwrap();
        assert_eq!(info.provider_badge(), "https://cdn.example.com/icons/mastercard.png");
    }
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_debug_never_exposes_number() {
    let info = validate_card_number(test_cards::VISA_1).unwrap();
    let debug = format!("{:?}", info);
    assert!(!debug.contains(test_cards::VISA_1));
    assert!(debug.contains("1111"));
}

#[test]
fn test_masking_hides_rejected_input() {
    let masked = mask::mask_card_number("4111111111111112");
    assert!(!masked.contains("41111111"));
    assert!(masked.ends_with("1112"));
}
