//! Validated wrapper types for Semantic Type
//!
//! This crate defines the machinery shared by every semantic type:
//! - GatewaySpec / SemanticSpec / ErrorlessSpec: contract descriptors whose
//!   gateway decides which raw values are legitimate
//! - SemanticType: the container holding a raw value that passed its gateway,
//!   plus the metadata the gateway derived
//! - Mutation pipeline: `try_map`, `mutating_try_map`, `map` and friends, which
//!   evolve a container only by re-running its gateway
//! - Capability projection: comparison, hashing, formatting, serde, iteration,
//!   arithmetic and literal construction, each enabled only when the raw value
//!   supports it and the contract allows it
//! - Error types: Rejected, MapError, ParseError
//!
//! Nothing here logs or touches global state. A gateway call is the only
//! contract code that runs on construction.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capability;
pub mod container;
pub mod error;
pub mod mutation;
pub mod spec;


pub use capability::FromLiteral;
pub use container::SemanticType;
pub use error::{MapError, ParseError, Rejected};
pub use spec::{ErrorlessSpec, GatewayOutput, GatewaySpec, SemanticSpec, Total};

// ============================================================================
// Property Tests
// ============================================================================
