//! Serialization
//!
//! The encoded form of a container is exactly the encoded form of its raw
//! value: no wrapper, no metadata. Any serde format therefore produces the
//! same bytes for `SemanticType<S>` as for `S::RawValue`.
//!
//! Decoding is the other gateway entry point. The raw value is decoded first,
//! then handed to [`SemanticType::create`]; a rejected value surfaces as a
//! decode error naming the contract, so invalid data never becomes a
//! container. Metadata is recomputed by the gateway and never read from the
//! input.

use crate::container::SemanticType;
use crate::error::Rejected;
use crate::spec::GatewaySpec;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

impl<S: GatewaySpec> Serialize for SemanticType<S>
where
    S::RawValue: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.raw_value().serialize(serializer)
    }
}

impl<'de, S: GatewaySpec> Deserialize<'de> for SemanticType<S>
where
    S::RawValue: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let candidate = S::RawValue::deserialize(deserializer)?;
        Self::create(candidate)
            .map_err(|error| D::Error::custom(Rejected::new(S::spec_name(), error)))
    }
}
