//! Collection contracts
//!
//! - [`NonEmptyVec<T>`]: at least one element, with the first and last element
//!   kept as metadata
//! - [`FixedLengthWords<N>`]: every word has exactly `N` characters

use semantic_type_core::{GatewayOutput, GatewaySpec, SemanticSpec, SemanticType};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use thiserror::Error;

// ============================================================================
// NonEmptyVec
// ============================================================================

/// Error when validating a non-empty vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NonEmptyVecError {
    /// The candidate had no elements
    #[error("array is empty")]
    ArrayIsEmpty,
}

/// First and last element of a non-empty vector
///
/// Both are the same element when the vector has length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ends<T> {
    /// The first element
    pub first: T,
    /// The last element
    pub last: T,
}

/// Contract for vectors with at least one element
///
/// Never instantiated; only used as a type parameter.
pub struct NonEmptyVecSpec<T>(PhantomData<fn() -> T>);

impl<T: Clone> GatewaySpec for NonEmptyVecSpec<T> {
    type RawValue = Vec<T>;
    type Metadata = Ends<T>;
    type Error = NonEmptyVecError;

    fn gateway(candidate: Vec<T>) -> Result<GatewayOutput<Vec<T>, Ends<T>>, NonEmptyVecError> {
        let ends = match (candidate.first(), candidate.last()) {
            (Some(first), Some(last)) => Ends {
                first: first.clone(),
                last: last.clone(),
            },
            _ => return Err(NonEmptyVecError::ArrayIsEmpty),
        };
        Ok(GatewayOutput::new(candidate, ends))
    }
}

/// A vector that is never empty
pub type NonEmptyVec<T> = SemanticType<NonEmptyVecSpec<T>>;

/// Infallible access to the ends of a [`NonEmptyVec`]
///
/// Shadows the `Option`-returning slice methods reachable through `Deref`.
pub trait NonEmptyVecExt<T> {
    /// The first element
    fn first(&self) -> &T;

    /// The last element
    fn last(&self) -> &T;
}

impl<T: Clone> NonEmptyVecExt<T> for NonEmptyVec<T> {
    #[inline]
    fn first(&self) -> &T {
        &self.metadata().first
    }

    #[inline]
    fn last(&self) -> &T {
        &self.metadata().last
    }
}

// ============================================================================
// FixedLengthWords
// ============================================================================

/// Error when validating a list of fixed-length words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("words without exactly {length} characters: {excluded_words:?}")]
pub struct WrongWordLength {
    /// The required length
    pub length: usize,
    /// Every offending word, in input order
    pub excluded_words: Vec<String>,
}

/// Contract for word lists in which every word has `N` characters
///
/// Never instantiated; only used as a type parameter.
pub struct FixedLengthWordsSpec<const N: usize>(());

impl<const N: usize> SemanticSpec for FixedLengthWordsSpec<N> {
    type RawValue = Vec<String>;
    type Error = WrongWordLength;

    fn validate(candidate: Vec<String>) -> Result<Vec<String>, WrongWordLength> {
        let excluded_words: Vec<String> = candidate
            .iter()
            .filter(|word| word.chars().count() != N)
            .cloned()
            .collect();
        if excluded_words.is_empty() {
            Ok(candidate)
        } else {
            Err(WrongWordLength {
                length: N,
                excluded_words,
            })
        }
    }
}

/// A word list where every word has exactly `N` characters
pub type FixedLengthWords<const N: usize> = SemanticType<FixedLengthWordsSpec<N>>;
