//! Gateway contracts
//!
//! A gateway contract is a static descriptor: it is never instantiated, it
//! only names the types a [`SemanticType`](crate::SemanticType) works with and
//! the single pure function that decides which raw values are legitimate.
//!
//! ## Contract Forms
//!
//! - [`GatewaySpec`]: the general form. The gateway returns the validated raw
//!   value together with metadata proven true about it.
//! - [`SemanticSpec`]: metadata is `()`. The gateway returns only the raw value.
//! - [`ErrorlessSpec`]: metadata is `()` and the gateway cannot fail. The
//!   default gateway is the identity.
//!
//! Every `ErrorlessSpec` is a `SemanticSpec`, and every `SemanticSpec` is a
//! `GatewaySpec`, through blanket implementations. Implement exactly one of
//! the three for a given spec type.
//!
//! ## Total and Fallible Modes
//!
//! A contract is **total** when its error type is [`Infallible`]. The [`Total`]
//! marker is implemented for all such contracts, including general contracts
//! that carry metadata. Capabilities that synthesize raw values outside caller
//! control (arithmetic, literals, element mutation) require `Total`.
//!
//! ## Purity
//!
//! Gateways take the candidate by value and must return the same outcome for
//! the same candidate. Metadata describes the *returned* raw value, which may
//! differ from the candidate (e.g. after case normalization).

use std::convert::Infallible;
use std::error::Error as StdError;

/// Output of a successful gateway call
///
/// Pairs the validated raw value with the metadata the gateway derived
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GatewayOutput<R, M = ()> {
    /// The validated raw value
    pub raw_value: R,

    /// Facts proven true about `raw_value`
    pub metadata: M,
}

impl<R, M> GatewayOutput<R, M> {
    /// Pair a validated raw value with its metadata
    #[inline]
    pub fn new(raw_value: R, metadata: M) -> Self {
        GatewayOutput {
            raw_value,
            metadata,
        }
    }

    /// Split into `(raw_value, metadata)`
    #[inline]
    pub fn into_parts(self) -> (R, M) {
        (self.raw_value, self.metadata)
    }
}

impl<R> GatewayOutput<R> {
    /// Output carrying no metadata
    #[inline]
    pub fn bare(raw_value: R) -> Self {
        GatewayOutput::new(raw_value, ())
    }
}

impl<R, M> From<(R, M)> for GatewayOutput<R, M> {
    fn from((raw_value, metadata): (R, M)) -> Self {
        GatewayOutput::new(raw_value, metadata)
    }
}

/// The general gateway contract
///
/// ## Example
///
/// ```
/// use semantic_type_core::{GatewayOutput, GatewaySpec, SemanticType};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("array is empty")]
/// struct ArrayIsEmpty;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Bounds {
///     first: i64,
///     last: i64,
/// }
///
/// enum NonEmptyIntsSpec {}
///
/// impl GatewaySpec for NonEmptyIntsSpec {
///     type RawValue = Vec<i64>;
///     type Metadata = Bounds;
///     type Error = ArrayIsEmpty;
///
///     fn gateway(candidate: Vec<i64>) -> Result<GatewayOutput<Vec<i64>, Bounds>, ArrayIsEmpty> {
///         match (candidate.first(), candidate.last()) {
///             (Some(&first), Some(&last)) => {
///                 Ok(GatewayOutput::new(candidate, Bounds { first, last }))
///             }
///             _ => Err(ArrayIsEmpty),
///         }
///     }
/// }
///
/// let ints = SemanticType::<NonEmptyIntsSpec>::create(vec![1, 2, 3]).unwrap();
/// assert_eq!(ints.metadata(), &Bounds { first: 1, last: 3 });
/// assert!(SemanticType::<NonEmptyIntsSpec>::create(vec![]).is_err());
/// ```
pub trait GatewaySpec {
    /// The wrapped value. Must have value semantics.
    type RawValue;

    /// Facts derived by the gateway. Must have value semantics.
    type Metadata;

    /// Why a candidate was rejected. [`Infallible`] for total contracts.
    type Error: StdError + 'static;

    /// Validate (and possibly normalize) a candidate raw value
    fn gateway(
        candidate: Self::RawValue,
    ) -> Result<GatewayOutput<Self::RawValue, Self::Metadata>, Self::Error>;

    /// Human-readable name of the contract
    ///
    /// Defaults to the unqualified type name of the contract.
    fn spec_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// A gateway contract without metadata
pub trait SemanticSpec {
    /// The wrapped value. Must have value semantics.
    type RawValue;

    /// Why a candidate was rejected
    type Error: StdError + 'static;

    /// Validate (and possibly normalize) a candidate raw value
    fn validate(candidate: Self::RawValue) -> Result<Self::RawValue, Self::Error>;

    /// Human-readable name of the contract
    fn spec_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<S: SemanticSpec> GatewaySpec for S {
    type RawValue = <S as SemanticSpec>::RawValue;
    type Metadata = ();
    type Error = <S as SemanticSpec>::Error;

    #[inline]
    fn gateway(
        candidate: <S as SemanticSpec>::RawValue,
    ) -> Result<GatewayOutput<<S as SemanticSpec>::RawValue>, <S as SemanticSpec>::Error> {
        <S as SemanticSpec>::validate(candidate).map(GatewayOutput::bare)
    }

    fn spec_name() -> &'static str {
        <S as SemanticSpec>::spec_name()
    }
}

/// A gateway contract that can never reject a candidate
///
/// ```
/// use semantic_type_core::{ErrorlessSpec, SemanticType};
///
/// enum CaselessSpec {}
///
/// impl ErrorlessSpec for CaselessSpec {
///     type RawValue = String;
///
///     fn normalize(candidate: String) -> String {
///         candidate.to_lowercase()
///     }
/// }
///
/// let hello = SemanticType::<CaselessSpec>::new("HeLLo".to_string());
/// assert_eq!(hello.raw_value(), "hello");
/// ```
pub trait ErrorlessSpec {
    /// The wrapped value. Must have value semantics.
    type RawValue;

    /// Map a candidate onto the value actually stored
    ///
    /// Defaults to the identity.
    #[inline]
    fn normalize(candidate: Self::RawValue) -> Self::RawValue {
        candidate
    }

    /// Human-readable name of the contract
    fn spec_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<S: ErrorlessSpec> SemanticSpec for S {
    type RawValue = <S as ErrorlessSpec>::RawValue;
    type Error = Infallible;

    #[inline]
    fn validate(
        candidate: <S as ErrorlessSpec>::RawValue,
    ) -> Result<<S as ErrorlessSpec>::RawValue, Infallible> {
        Ok(<S as ErrorlessSpec>::normalize(candidate))
    }

    fn spec_name() -> &'static str {
        <S as ErrorlessSpec>::spec_name()
    }
}

/// Marker for contracts whose gateway cannot fail
///
/// Implemented automatically for every [`GatewaySpec`] with
/// `Error = Infallible`; never implement it by hand.
pub trait Total: GatewaySpec<Error = Infallible> {}

impl<S: GatewaySpec<Error = Infallible>> Total for S {}

/// Unwrap a result whose error type is uninhabited
#[inline]
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Strip the module path from a type name, keeping generic arguments intact
fn short_type_name(full: &'static str) -> &'static str {
    let path_end = full.find('<').unwrap_or(full.len());
    match full[..path_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

// ============================================================================
// Tests
// ============================================================================
