//! Semantic Type - validated wrapper types with gateway metadata
//!
//! A semantic type is a raw value that passed a validation rule (its
//! *gateway*), together with facts the gateway proved about it. Containers of
//! different contracts never mix, and the raw value's own capabilities
//! (comparison, arithmetic, iteration, serde) are re-exposed only where they
//! cannot break the validation guarantee.
//!
//! # Quick Start
//!
//! ```
//! use semantic_type::catalog::{EmailAddress, EmailAddressExt, Seconds};
//!
//! let email = EmailAddress::create("Joe@GMAIL.com".to_string()).unwrap();
//! assert_eq!(email.raw_value(), "joe@gmail.com");
//! assert_eq!(email.host(), "gmail.com");
//! assert!(EmailAddress::create("@gmail.com".to_string()).is_err());
//!
//! assert_eq!(Seconds::new(5) + Seconds::new(10), Seconds::new(15));
//! assert_eq!(Seconds::new(5) + 7, Seconds::new(12));
//! ```
//!
//! # Architecture
//!
//! The machinery lives in `semantic-type-core` and is re-exported here. The
//! ready-made contracts of `semantic-type-catalog` are available under
//! [`catalog`] with the `catalog` feature (enabled by default).

pub use semantic_type_core::*;

#[cfg(feature = "catalog")]
pub use semantic_type_catalog as catalog;
