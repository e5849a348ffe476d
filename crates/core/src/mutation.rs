//! The mutation pipeline
//!
//! Containers evolve only by re-running their own gateway. Every operation
//! here computes a candidate from the current raw value, hands it to
//! [`SemanticType::create`] (or [`SemanticType::new`] for total contracts),
//! and then either returns the new container or assigns it to `self`.
//!
//! ## Atomicity
//!
//! In-place operations work on a private copy of the raw value. `self` is
//! overwritten only after the copy passed the gateway, so a failing call
//! leaves the container exactly as it was. A panicking transform leaves it
//! untouched as well.
//!
//! ## Operation Matrix
//!
//! | | returns new container | in place |
//! |---|---|---|
//! | fallible, infallible transform | `try_map`, `into_try_map` | `mutating_try_map` |
//! | fallible, fallible transform | `try_map_with` | `mutating_try_map_with` |
//! | total | `map`, `into_map` | `mutating_map` |

use crate::container::SemanticType;
use crate::error::MapError;
use crate::spec::{GatewaySpec, Total};

impl<S: GatewaySpec> SemanticType<S> {
    /// Transform a copy of the raw value and revalidate it
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `S::Error` when the gateway rejects the transformed value.
    pub fn try_map<F>(&self, transform: F) -> Result<Self, S::Error>
    where
        F: FnOnce(S::RawValue) -> S::RawValue,
        S::RawValue: Clone,
    {
        Self::create(transform(self.raw_value().clone()))
    }

    /// Consuming variant of [`try_map`](Self::try_map); needs no `Clone`
    pub fn into_try_map<F>(self, transform: F) -> Result<Self, S::Error>
    where
        F: FnOnce(S::RawValue) -> S::RawValue,
    {
        Self::create(transform(self.into_raw_value()))
    }

    /// Mutate a copy of the raw value; keep it only if it passes the gateway
    ///
    /// # Errors
    ///
    /// Returns `S::Error` when the gateway rejects the mutated copy. `self`
    /// is unchanged in that case.
    pub fn mutating_try_map<F>(&mut self, mutation: F) -> Result<(), S::Error>
    where
        F: FnOnce(&mut S::RawValue),
        S::RawValue: Clone,
    {
        let mut candidate = self.raw_value().clone();
        mutation(&mut candidate);
        *self = Self::create(candidate)?;
        Ok(())
    }

    /// Like [`try_map`](Self::try_map), for transforms that can fail themselves
    ///
    /// # Errors
    ///
    /// [`MapError::Transform`] if the transform fails (the gateway does not
    /// run), [`MapError::Rejected`] if the gateway rejects its output.
    pub fn try_map_with<F, E>(&self, transform: F) -> Result<Self, MapError<E, S::Error>>
    where
        F: FnOnce(S::RawValue) -> Result<S::RawValue, E>,
        S::RawValue: Clone,
    {
        let candidate = transform(self.raw_value().clone()).map_err(MapError::Transform)?;
        Self::create(candidate).map_err(MapError::Rejected)
    }

    /// Like [`mutating_try_map`](Self::mutating_try_map), for mutations that
    /// can fail themselves
    ///
    /// # Errors
    ///
    /// Same as [`try_map_with`](Self::try_map_with). `self` is unchanged on
    /// either kind of failure.
    pub fn mutating_try_map_with<F, E>(&mut self, mutation: F) -> Result<(), MapError<E, S::Error>>
    where
        F: FnOnce(&mut S::RawValue) -> Result<(), E>,
        S::RawValue: Clone,
    {
        let mut candidate = self.raw_value().clone();
        mutation(&mut candidate).map_err(MapError::Transform)?;
        *self = Self::create(candidate).map_err(MapError::Rejected)?;
        Ok(())
    }
}

impl<S: Total> SemanticType<S> {
    /// Transform a copy of the raw value through a gateway that cannot fail
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: FnOnce(S::RawValue) -> S::RawValue,
        S::RawValue: Clone,
    {
        Self::new(transform(self.raw_value().clone()))
    }

    /// Consuming variant of [`map`](Self::map); needs no `Clone`
    pub fn into_map<F>(self, transform: F) -> Self
    where
        F: FnOnce(S::RawValue) -> S::RawValue,
    {
        Self::new(transform(self.into_raw_value()))
    }

    /// Mutate the raw value in place, then pass it back through the gateway
    pub fn mutating_map<F>(&mut self, mutation: F)
    where
        F: FnOnce(&mut S::RawValue),
        S::RawValue: Clone,
    {
        let mut candidate = self.raw_value().clone();
        mutation(&mut candidate);
        self.set_raw_value(candidate);
    }
}

// ============================================================================
// Tests
// ============================================================================
