//! Test utilities shared by the conformance tiers
//!
//! Holds a few locally defined contracts, so the suite also covers contracts
//! written outside the library's own crates.

#![allow(dead_code)]

use semantic_type::{GatewayOutput, GatewaySpec, SemanticSpec, SemanticType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Build an owned word list
pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

// ============================================================================
// Person with a short name
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub greeting: String,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Person {
            name: name.to_string(),
            greeting: format!("Hello, my name is {}.", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortNameError {
    #[error("name is too long: {name}")]
    NameTooLong { name: String },
}

/// Person whose name has fewer than five characters
pub enum ShortPersonSpec {}

impl SemanticSpec for ShortPersonSpec {
    type RawValue = Person;
    type Error = ShortNameError;

    fn validate(candidate: Person) -> Result<Person, ShortNameError> {
        if candidate.name.chars().count() < 5 {
            Ok(candidate)
        } else {
            Err(ShortNameError::NameTooLong {
                name: candidate.name,
            })
        }
    }
}

pub type ShortPerson = SemanticType<ShortPersonSpec>;

// ============================================================================
// Sorted, deduplicated tags with a count
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tag list is full")]
pub struct TooManyTags;

/// At most eight tags, kept sorted and deduplicated; metadata is the count
pub enum TagSetSpec {}

pub const MAX_TAGS: usize = 8;

impl GatewaySpec for TagSetSpec {
    type RawValue = Vec<String>;
    type Metadata = usize;
    type Error = TooManyTags;

    fn gateway(mut candidate: Vec<String>) -> Result<GatewayOutput<Vec<String>, usize>, TooManyTags> {
        candidate.sort();
        candidate.dedup();
        if candidate.len() > MAX_TAGS {
            return Err(TooManyTags);
        }
        let count = candidate.len();
        Ok(GatewayOutput::new(candidate, count))
    }
}

pub type TagSet = SemanticType<TagSetSpec>;
