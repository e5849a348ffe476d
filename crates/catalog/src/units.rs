//! Numeric quantities
//!
//! Each unit is its own contract, so `Seconds + Cents` does not compile even
//! though both wrap an `i64`. The identity contracts are total and get the
//! full arithmetic surface; [`Percentage`] is bounded and gets none.

use semantic_type_core::{ErrorlessSpec, SemanticSpec, SemanticType};
use thiserror::Error;

// ============================================================================
// Integer units
// ============================================================================

/// Whole seconds
pub enum SecondsSpec {}

impl ErrorlessSpec for SecondsSpec {
    type RawValue = i64;
}

/// A duration in whole seconds
pub type Seconds = SemanticType<SecondsSpec>;

/// Whole cents
pub enum CentsSpec {}

impl ErrorlessSpec for CentsSpec {
    type RawValue = i64;
}

/// A monetary amount in cents
pub type Cents = SemanticType<CentsSpec>;

// ============================================================================
// Floating point units
// ============================================================================

/// Kilograms
pub enum KilogramsSpec {}

impl ErrorlessSpec for KilogramsSpec {
    type RawValue = f64;
}

/// A mass in kilograms
pub type Kilograms = SemanticType<KilogramsSpec>;

/// Meters
pub enum MetersSpec {}

impl ErrorlessSpec for MetersSpec {
    type RawValue = f64;
}

/// A length in meters
pub type Meters = SemanticType<MetersSpec>;

// ============================================================================
// Bounded values
// ============================================================================

/// Lowest accepted percentage
pub const MIN_PERCENTAGE: f64 = 0.0;

/// Highest accepted percentage
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Error when validating a percentage
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("percentage out of range: {value} (must be within 0..=100)")]
pub struct PercentageOutOfRange {
    /// The rejected value
    pub value: f64,
}

/// A number in `0..=100`; NaN is rejected
pub enum PercentageSpec {}

impl SemanticSpec for PercentageSpec {
    type RawValue = f64;
    type Error = PercentageOutOfRange;

    fn validate(candidate: f64) -> Result<f64, PercentageOutOfRange> {
        if (MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&candidate) {
            Ok(candidate)
        } else {
            Err(PercentageOutOfRange { value: candidate })
        }
    }
}

/// A percentage in `0..=100`
pub type Percentage = SemanticType<PercentageSpec>;
