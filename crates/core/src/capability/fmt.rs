//! Formatting and error chaining
//!
//! `Display` is the raw value's own. `Debug` prefixes the contract name so two
//! containers over the same raw value can be told apart in logs and test
//! failures, e.g. `(Seconds): 42`.

use crate::container::SemanticType;
use crate::spec::GatewaySpec;
use std::error::Error;
use std::fmt;

impl<S: GatewaySpec> fmt::Display for SemanticType<S>
where
    S::RawValue: fmt::Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.raw_value(), f)
    }
}

impl<S: GatewaySpec> fmt::Debug for SemanticType<S>
where
    S::RawValue: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): ", S::spec_name())?;
        fmt::Debug::fmt(self.raw_value(), f)
    }
}

/// A container whose raw value is an error is itself an error
impl<S: GatewaySpec> Error for SemanticType<S>
where
    S::RawValue: Error,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.raw_value().source()
    }
}
