//! Error types for semantic type operations
//!
//! Gateway errors are contract-specific and returned verbatim by
//! [`SemanticType::create`](crate::SemanticType::create). The types here only
//! wrap them where an operation has more than one way to fail, or where a
//! caller wants the contract name attached. The wrapped gateway error is never
//! altered and is always reachable through `source()` or by matching.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// A gateway error tagged with the name of the contract that raised it
///
/// Returned by [`SemanticType::try_new`](crate::SemanticType::try_new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{spec} rejected the candidate value: {source}")]
pub struct Rejected<E> {
    spec: &'static str,
    #[source]
    source: E,
}

impl<E> Rejected<E> {
    /// Tag a gateway error with a contract name
    pub fn new(spec: &'static str, source: E) -> Self {
        Rejected { spec, source }
    }

    /// Name of the rejecting contract
    #[inline]
    pub fn spec(&self) -> &'static str {
        self.spec
    }

    /// The gateway error
    #[inline]
    pub fn get_ref(&self) -> &E {
        &self.source
    }

    /// Consume and return the gateway error
    #[inline]
    pub fn into_inner(self) -> E {
        self.source
    }
}

/// Failure of a mutation whose transform can itself fail
///
/// Returned by [`try_map_with`](crate::SemanticType::try_map_with) and
/// [`mutating_try_map_with`](crate::SemanticType::mutating_try_map_with).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError<E, G> {
    /// The caller's transform failed; the gateway never ran
    #[error("transform failed: {0}")]
    Transform(#[source] E),

    /// The transform succeeded but the gateway rejected its output
    #[error("gateway rejected the transformed value: {0}")]
    Rejected(#[source] G),
}

impl<E, G> MapError<E, G> {
    /// Whether the gateway (rather than the transform) refused the value
    pub fn is_rejection(&self) -> bool {
        matches!(self, MapError::Rejected(_))
    }
}

/// Failure to build a container from text
///
/// Returned by the [`FromStr`](std::str::FromStr) implementation of
/// [`SemanticType`](crate::SemanticType).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<P, G> {
    /// The text is not a valid raw value
    #[error("cannot parse raw value: {0}")]
    Parse(#[source] P),

    /// The parsed raw value was rejected by the gateway
    #[error("gateway rejected the parsed value: {0}")]
    Rejected(#[source] G),
}

// ============================================================================
// Tests
// ============================================================================
