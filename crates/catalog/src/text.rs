//! Text contracts
//!
//! - [`CaselessString`]: lower-cased, total
//! - [`TrimmedString`]: surrounding whitespace removed, total
//! - [`EmailAddress`]: lower-cased `user@host`, with the two halves as metadata

use semantic_type_core::{ErrorlessSpec, GatewayOutput, GatewaySpec, SemanticType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Normalizing strings
// ============================================================================

/// Lower-cases every candidate
pub enum CaselessStringSpec {}

impl ErrorlessSpec for CaselessStringSpec {
    type RawValue = String;

    fn normalize(candidate: String) -> String {
        candidate.to_lowercase()
    }
}

/// A string compared and hashed without regard to case
pub type CaselessString = SemanticType<CaselessStringSpec>;

/// Strips leading and trailing whitespace
pub enum TrimmedStringSpec {}

impl ErrorlessSpec for TrimmedStringSpec {
    type RawValue = String;

    fn normalize(candidate: String) -> String {
        let trimmed = candidate.trim();
        if trimmed.len() == candidate.len() {
            candidate
        } else {
            trimmed.to_string()
        }
    }
}

/// A string without surrounding whitespace
pub type TrimmedString = SemanticType<TrimmedStringSpec>;

// ============================================================================
// Email addresses
// ============================================================================

/// The two halves of an email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailParts {
    /// Everything before the first `@`
    pub user: String,
    /// Everything after the first `@`
    pub host: String,
}

/// Error when validating an email address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid email address: {candidate:?}")]
pub struct InvalidEmail {
    /// The rejected candidate, already lower-cased
    pub candidate: String,
}

/// Lower-cases the candidate and requires a non-empty user and host around
/// the first `@`
pub enum EmailAddressSpec {}

impl GatewaySpec for EmailAddressSpec {
    type RawValue = String;
    type Metadata = EmailParts;
    type Error = InvalidEmail;

    fn gateway(candidate: String) -> Result<GatewayOutput<String, EmailParts>, InvalidEmail> {
        let candidate = candidate.to_lowercase();
        let parts = candidate.split_once('@').and_then(|(user, host)| {
            (!user.is_empty() && !host.is_empty()).then(|| EmailParts {
                user: user.to_string(),
                host: host.to_string(),
            })
        });
        match parts {
            Some(parts) => Ok(GatewayOutput::new(candidate, parts)),
            None => Err(InvalidEmail { candidate }),
        }
    }
}

/// A lower-cased email address
pub type EmailAddress = SemanticType<EmailAddressSpec>;

/// Named access to the email metadata
pub trait EmailAddressExt {
    /// Everything before the first `@`
    fn user(&self) -> &str;

    /// Everything after the first `@`
    fn host(&self) -> &str;
}

impl EmailAddressExt for EmailAddress {
    #[inline]
    fn user(&self) -> &str {
        &self.metadata().user
    }

    #[inline]
    fn host(&self) -> &str {
        &self.metadata().host
    }
}
