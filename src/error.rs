//! Error types for card number validation.
//!
//! Validation never panics. Each rule that can reject an input has its own
//! [`ValidationError`] variant; the orchestrator turns those into a
//! [`ServiceError`], which is either a caller-caused [`ValidationFailure`]
//! or an opaque [`InternalFailure`].

use crate::Provider;
use std::fmt;

/// Name of the only input field the service validates.
pub const CARD_NUMBER_FIELD: &str = "card_number";

/// A single violated validation rule.
///
/// Produced by the structural validator, the checksum stage and the
/// provider classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The first character is not a supported network prefix.
    UnsupportedPrefix {
        /// The leading character that was found.
        character: char,
    },

    /// The card number is neither 15 nor 16 characters long.
    InvalidLength {
        /// The actual number of characters provided.
        length: usize,
    },

    /// The card number length does not fit the network of its prefix.
    ///
    /// American Express is the only network accepted with 15 digits.
    InvalidLengthForProvider {
        /// The network implied by the prefix.
        provider: Provider,
        /// The actual number of characters.
        length: usize,
    },

    /// A character other than a digit or a space was found.
    InvalidCharacter {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The Luhn checksum validation failed.
    ChecksumFailed,

    /// No known provider matches the leading character.
    UnknownProvider,
}

impl ValidationError {
    /// Returns a stable, machine-readable reason code for this error.
    ///
    /// Both length rules share `invalid_length`.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "required",
            Self::UnsupportedPrefix { .. } => "unsupported_prefix",
            Self::InvalidLength { .. } | Self::InvalidLengthForProvider { .. } => "invalid_length",
            Self::InvalidCharacter { .. } => "invalid_characters",
            Self::ChecksumFailed => "checksum_failed",
            Self::UnknownProvider => "unknown_provider",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is required"),

            Self::UnsupportedPrefix { character } => {
                write!(
                    f,
                    "unsupported prefix '{}' (card number must start with 3, 4, 5 or 6)",
                    character.escape_default()
                )
            }

            Self::InvalidLength { length } => {
                write!(
                    f,
                    "invalid length: got {} characters, expected 15 or 16",
                    length
                )
            }

            Self::InvalidLengthForProvider { provider, length } => {
                let expected = if *provider == Provider::Amex { 15 } else { 16 };
                write!(
                    f,
                    "invalid length: {} card numbers must have {} digits, got {}",
                    provider, expected, length
                )
            }

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid characters: '{}' at position {} (only digits and spaces allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::ChecksumFailed => write!(f, "checksum failed"),

            Self::UnknownProvider => write!(f, "unknown card provider"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A structured description of which input field failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FieldViolation {
    /// The offending field.
    pub field: String,
    /// Machine-readable reason code, see [`ValidationError::reason`].
    pub reason: String,
    /// Human-readable description of the violated rule.
    pub description: String,
}

impl FieldViolation {
    /// Creates a violation for the given field from a rule error.
    pub fn new(field: impl Into<String>, error: &ValidationError) -> Self {
        Self {
            field: field.into(),
            reason: error.reason().to_string(),
            description: error.to_string(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.description)
    }
}

/// A caller-caused failure carrying at least one field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Builds a failure from a list of violations.
    ///
    /// Returns `None` when the list is empty, so a failure always names
    /// at least one violated rule.
    pub fn new(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Builds a failure for the `card_number` field.
    pub fn card_number(error: &ValidationError) -> Self {
        Self {
            violations: vec![FieldViolation::new(CARD_NUMBER_FIELD, error)],
        }
    }

    /// Returns the field violations.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns the reason code of the first violation.
    pub fn reason(&self) -> &str {
        // never empty, see constructors
        self.violations
            .first()
            .map(|v| v.reason.as_str())
            .unwrap_or_default()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error(s): [")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for ValidationFailure {}

/// A server-side fault unrelated to the shape of the input.
///
/// The message is meant for logs only and is never sent to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalFailure {
    message: String,
}

impl InternalFailure {
    /// Creates an internal failure with a diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InternalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal error: {}", self.message)
    }
}

impl std::error::Error for InternalFailure {}

/// The error returned by [`validate_card_number`](crate::validate_card_number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The input was rejected; the caller must change it.
    Validation(ValidationFailure),
    /// The engine hit an unexpected fault.
    Internal(InternalFailure),
}

impl ServiceError {
    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            Self::Internal(_) => None,
        }
    }

    /// Returns true if the error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(failure) => failure.fmt(f),
            Self::Internal(failure) => failure.fmt(f),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(failure) => Some(failure),
            Self::Internal(failure) => Some(failure),
        }
    }
}

impl From<ValidationFailure> for ServiceError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

impl From<InternalFailure> for ServiceError {
    fn from(failure: InternalFailure) -> Self {
        Self::Internal(failure)
    }
}
