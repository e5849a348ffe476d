//! Capability projection
//!
//! Re-exposes the raw value's own traits on [`SemanticType`](crate::SemanticType),
//! each behind the bounds that make it safe.
//!
//! ## Availability
//!
//! | Module | Traits | Requires |
//! |---|---|---|
//! | `compare` | `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash` | raw value implements it |
//! | `fmt` | `Display`, `Debug`, `Error` | raw value implements it |
//! | `codec` | `Serialize`, `Deserialize` | raw value implements it |
//! | `collection` | `IntoIterator`, `Index` | raw value implements it |
//! | `collection` | `Extend`, `FromIterator`, element writes | `Total` |
//! | `arithmetic` | `Add`, `Sub`, `Mul`, `Div`, `Rem`, `Neg`, `Sum`, `Product` | `Total` |
//! | `literal` | `FromLiteral`, `Default` | `Total` |
//! | `literal` | `FromStr` | raw value implements it |
//!
//! Read-only capabilities are safe in both modes. Capabilities that produce a
//! raw value the caller did not hand to the gateway are only offered when the
//! gateway is total, since there is no error channel to report a rejection.
//!
//! Every binary operation is defined between containers of the *same*
//! contract only.

pub mod arithmetic;
pub mod codec;
pub mod collection;
pub mod compare;
pub mod fmt;
pub mod literal;

pub use literal::FromLiteral;
