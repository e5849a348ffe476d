//! Construction from literals, defaults and text
//!
//! A literal is a value the author typed into the program, so for total
//! contracts it may become a container directly:
//!
//! ```
//! use semantic_type_core::{ErrorlessSpec, FromLiteral, SemanticType};
//!
//! enum TitleSpec {}
//! impl ErrorlessSpec for TitleSpec {
//!     type RawValue = String;
//!     fn normalize(candidate: String) -> String {
//!         candidate.trim().to_string()
//!     }
//! }
//!
//! let title = SemanticType::<TitleSpec>::from_literal("  Dune ");
//! assert_eq!(title.raw_value(), "Dune");
//! ```
//!
//! Fallible contracts have no literal form: they are built with
//! [`create`](SemanticType::create) and the error is handled.
//!
//! Parsing text with [`str::parse`] works in both modes, since `FromStr` has
//! an error channel of its own.

use crate::container::SemanticType;
use crate::error::ParseError;
use crate::spec::{GatewaySpec, Total};
use std::str::FromStr;

/// Construction from a literal of type `L`, for total contracts
pub trait FromLiteral<L>: Sized {
    /// Convert the literal into a raw value and pass it through the gateway
    fn from_literal(literal: L) -> Self;
}

impl<S, L> FromLiteral<L> for SemanticType<S>
where
    S: Total,
    S::RawValue: From<L>,
{
    #[inline]
    fn from_literal(literal: L) -> Self {
        Self::new(S::RawValue::from(literal))
    }
}

/// The raw value's default, normalized by the gateway
impl<S> Default for SemanticType<S>
where
    S: Total,
    S::RawValue: Default,
{
    fn default() -> Self {
        Self::new(S::RawValue::default())
    }
}

impl<S> FromStr for SemanticType<S>
where
    S: GatewaySpec,
    S::RawValue: FromStr,
{
    type Err = ParseError<<S::RawValue as FromStr>::Err, S::Error>;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let candidate = text.parse::<S::RawValue>().map_err(ParseError::Parse)?;
        Self::create(candidate).map_err(ParseError::Rejected)
    }
}
