//! Ready-made contracts for Semantic Type
//!
//! This crate collects concrete contracts built on `semantic-type-core`:
//! - Text: CaselessString, TrimmedString, EmailAddress
//! - Identifiers: Identifier (1-256 chars of `[A-Za-z0-9_.-]`)
//! - Units: Seconds, Cents, Kilograms, Meters, Percentage
//! - Collections: NonEmptyVec, FixedLengthWords
//!
//! Each contract is an uninhabited spec type plus a `SemanticType` alias.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod identifier;
pub mod text;
pub mod units;

pub use collections::{
    Ends, FixedLengthWords, FixedLengthWordsSpec, NonEmptyVec, NonEmptyVecError, NonEmptyVecExt,
    NonEmptyVecSpec, WrongWordLength,
};
pub use identifier::{Identifier, IdentifierError, IdentifierSpec, MAX_IDENTIFIER_LENGTH};
pub use text::{
    CaselessString, CaselessStringSpec, EmailAddress, EmailAddressExt, EmailAddressSpec,
    EmailParts, InvalidEmail, TrimmedString, TrimmedStringSpec,
};
pub use units::{
    Cents, CentsSpec, Kilograms, KilogramsSpec, Meters, MetersSpec, Percentage,
    PercentageOutOfRange, PercentageSpec, Seconds, SecondsSpec, MAX_PERCENTAGE, MIN_PERCENTAGE,
};
