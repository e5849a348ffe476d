//! The validated container
//!
//! [`SemanticType<S>`] is the only runtime entity of this crate. It holds one
//! raw value and one metadata value, and both were produced together by a
//! single successful call to `S::gateway`.
//!
//! ## The Invariant
//!
//! The stored pair is always the output of some successful gateway call. This
//! file is the only place the fields are written:
//!
//! - the fields are private to this module
//! - [`SemanticType::from_validated`] is private and only receives gateway output
//! - every other module (mutation, capabilities) builds containers through
//!   [`SemanticType::create`] or [`SemanticType::new`]
//!
//! Checking the invariant therefore means reading this file and nothing else.

use crate::error::Rejected;
use crate::spec::{into_ok, GatewayOutput, GatewaySpec, Total};
use std::marker::PhantomData;
use std::ops::Deref;

/// A raw value that passed the gateway of contract `S`
///
/// Containers of different contracts are different types, even when they wrap
/// the same raw value type. No comparison, arithmetic or conversion is ever
/// defined between them.
///
/// ## Examples
///
/// ```
/// use semantic_type_core::{ErrorlessSpec, SemanticType};
///
/// enum SecondsSpec {}
/// impl ErrorlessSpec for SecondsSpec {
///     type RawValue = i64;
/// }
/// type Seconds = SemanticType<SecondsSpec>;
///
/// assert_eq!(Seconds::new(5) + Seconds::new(10), Seconds::new(15));
/// assert_eq!(Seconds::new(5) + 7, Seconds::new(12));
/// ```
pub struct SemanticType<S: GatewaySpec> {
    raw_value: S::RawValue,
    metadata: S::Metadata,
    spec: PhantomData<fn() -> S>,
}

impl<S: GatewaySpec> SemanticType<S> {
    /// Wrap a pair that was just returned by `S::gateway`
    ///
    /// Must only ever be called with gateway output.
    #[inline]
    fn from_validated(output: GatewayOutput<S::RawValue, S::Metadata>) -> Self {
        SemanticType {
            raw_value: output.raw_value,
            metadata: output.metadata,
            spec: PhantomData,
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Run the gateway on `candidate` and wrap its output
    ///
    /// This is the only way to create a container. The gateway runs exactly
    /// once and its error, if any, is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns `S::Error` when the gateway rejects the candidate.
    pub fn create(candidate: S::RawValue) -> Result<Self, S::Error> {
        S::gateway(candidate).map(Self::from_validated)
    }

    /// Same as [`create`](Self::create), with the error tagged by contract name
    ///
    /// The gateway error is kept verbatim as the [`Rejected`] source and can be
    /// recovered with [`Rejected::into_inner`].
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] when the gateway rejects the candidate.
    pub fn try_new(candidate: S::RawValue) -> Result<Self, Rejected<S::Error>> {
        Self::create(candidate).map_err(|error| Rejected::new(S::spec_name(), error))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The validated raw value
    #[inline]
    pub fn raw_value(&self) -> &S::RawValue {
        &self.raw_value
    }

    /// Metadata the gateway derived for the raw value
    #[inline]
    pub fn metadata(&self) -> &S::Metadata {
        &self.metadata
    }

    /// Consume and return the raw value
    #[inline]
    pub fn into_raw_value(self) -> S::RawValue {
        self.raw_value
    }

    /// Consume and return `(raw_value, metadata)`
    #[inline]
    pub fn into_parts(self) -> (S::RawValue, S::Metadata) {
        (self.raw_value, self.metadata)
    }

    /// Name of the contract this container belongs to
    #[inline]
    pub fn spec_name() -> &'static str {
        S::spec_name()
    }
}

impl<S: Total> SemanticType<S> {
    /// Wrap a value through a gateway that cannot fail
    #[inline]
    pub fn new(candidate: S::RawValue) -> Self {
        into_ok(Self::create(candidate))
    }

    /// Replace the raw value, passing it through the gateway first
    pub fn set_raw_value(&mut self, value: S::RawValue) {
        *self = Self::new(value);
    }

    /// Replace the raw value and return the previous one
    pub fn replace_raw_value(&mut self, value: S::RawValue) -> S::RawValue {
        std::mem::replace(self, Self::new(value)).into_raw_value()
    }
}

impl<S: GatewaySpec> Clone for SemanticType<S>
where
    S::RawValue: Clone,
    S::Metadata: Clone,
{
    fn clone(&self) -> Self {
        SemanticType {
            raw_value: self.raw_value.clone(),
            metadata: self.metadata.clone(),
            spec: PhantomData,
        }
    }
}

impl<S: GatewaySpec> Copy for SemanticType<S>
where
    S::RawValue: Copy,
    S::Metadata: Copy,
{
}

impl<S: GatewaySpec> Deref for SemanticType<S> {
    type Target = S::RawValue;

    #[inline]
    fn deref(&self) -> &S::RawValue {
        &self.raw_value
    }
}

impl<S: GatewaySpec> AsRef<S::RawValue> for SemanticType<S> {
    #[inline]
    fn as_ref(&self) -> &S::RawValue {
        &self.raw_value
    }
}

// ============================================================================
// Tests
// ============================================================================
