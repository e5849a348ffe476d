//! Equality, ordering and hashing
//!
//! All three delegate to the raw value and ignore the metadata, which is a
//! function of the raw value. The `Rhs` of every comparison is `Self`: two
//! containers of different contracts are never comparable, even when their raw
//! value types coincide.

use crate::container::SemanticType;
use crate::spec::GatewaySpec;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<S: GatewaySpec> PartialEq for SemanticType<S>
where
    S::RawValue: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw_value() == other.raw_value()
    }
}

impl<S: GatewaySpec> Eq for SemanticType<S> where S::RawValue: Eq {}

impl<S: GatewaySpec> PartialOrd for SemanticType<S>
where
    S::RawValue: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw_value().partial_cmp(other.raw_value())
    }
}

impl<S: GatewaySpec> Ord for SemanticType<S>
where
    S::RawValue: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw_value().cmp(other.raw_value())
    }
}

impl<S: GatewaySpec> Hash for SemanticType<S>
where
    S::RawValue: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_value().hash(state);
    }
}
