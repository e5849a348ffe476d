//! Identifier contract
//!
//! Identifiers are short machine-friendly names: keys, slugs, run labels.
//!
//! ## Examples
//!
//! - Valid: "training-run-1", "experiment.v2", "_private"
//! - Invalid: "" (empty), "-starts-with-dash", ".hidden", "has spaces"
//!
//! ## Validation
//!
//! Identifiers must:
//! - Be 1-256 characters
//! - Contain only alphanumeric, dash, underscore, dot
//! - Not start with a dash or dot

use semantic_type_core::{SemanticSpec, SemanticType};
use thiserror::Error;

/// Maximum length of an identifier
pub const MAX_IDENTIFIER_LENGTH: usize = 256;

/// Error when validating an identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Identifier is empty
    #[error("identifier cannot be empty")]
    Empty,

    /// Identifier exceeds maximum length
    #[error("identifier too long: {length} chars (max {max})")]
    TooLong {
        /// Actual length of the identifier
        length: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Identifier contains an invalid character
    #[error(
        "invalid character '{character}' at position {position} \
         (only alphanumeric, dash, underscore, dot allowed)"
    )]
    InvalidChar {
        /// The invalid character
        character: char,
        /// Position of the invalid character
        position: usize,
    },

    /// Identifier starts with an invalid character
    #[error("identifier cannot start with '{character}'")]
    InvalidStart {
        /// The invalid starting character
        character: char,
    },
}

/// Identifier validation rules
pub enum IdentifierSpec {}

impl IdentifierSpec {
    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
    }
}

impl SemanticSpec for IdentifierSpec {
    type RawValue = String;
    type Error = IdentifierError;

    fn validate(candidate: String) -> Result<String, IdentifierError> {
        let first = match candidate.chars().next() {
            Some(first) => first,
            None => return Err(IdentifierError::Empty),
        };

        let length = candidate.chars().count();
        if length > MAX_IDENTIFIER_LENGTH {
            return Err(IdentifierError::TooLong {
                length,
                max: MAX_IDENTIFIER_LENGTH,
            });
        }

        if first == '-' || first == '.' {
            return Err(IdentifierError::InvalidStart { character: first });
        }

        if let Some((position, character)) = candidate
            .chars()
            .enumerate()
            .find(|&(_, c)| !Self::is_valid_char(c))
        {
            return Err(IdentifierError::InvalidChar {
                character,
                position,
            });
        }

        Ok(candidate)
    }
}

/// A validated identifier
pub type Identifier = SemanticType<IdentifierSpec>;
