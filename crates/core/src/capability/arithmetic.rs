//! Arithmetic for total contracts
//!
//! An arithmetic result is a raw value nobody validated, so the operators are
//! only implemented when the gateway is [`Total`]: the result goes through
//! [`SemanticType::new`] and the gateway may still normalize it.
//!
//! ## Forms
//!
//! - `container OP container` for any raw value implementing `OP`
//! - `container OP raw` and `raw OP container` for the primitive numeric raw
//!   value types (`Seconds(5) + 7`, `3 * Seconds(4)`)
//! - compound assignment for both of the above
//! - `Neg`, `Sum` and `Product`
//! - [`advanced_by`](SemanticType::advanced_by) and
//!   [`distance_to`](SemanticType::distance_to) for stepping through ordered
//!   raw values
//!
//! `container * container` and `container / container` exist for every total
//! contract whose raw value supports them; there is no opt-in marker. A
//! contract like `Seconds` therefore has `Seconds * Seconds`, even though the
//! product is not a duration. Contracts that must not scale by themselves
//! should not be total.
//!
//! # Panics
//!
//! The operators behave exactly like the raw value's. Integer overflow panics
//! in debug builds and wraps in release builds, and integer division or
//! remainder by zero always panics (`Seconds::new(i64::MAX) + 1`,
//! `Cents::new(1) / 0`). The gateway never sees a value in those cases.

use crate::container::SemanticType;
use crate::spec::{GatewaySpec, Total};
use std::convert::Infallible;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// `container OP container` and `container OP= container`
macro_rules! impl_container_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<S> $Op for SemanticType<S>
        where
            S: Total,
            S::RawValue: $Op<Output = S::RawValue>,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self::new(self.into_raw_value().$op(rhs.into_raw_value()))
            }
        }

        impl<S> $OpAssign for SemanticType<S>
        where
            S: Total,
            S::RawValue: $OpAssign + Clone,
        {
            fn $op_assign(&mut self, rhs: Self) {
                self.mutating_map(|raw| raw.$op_assign(rhs.into_raw_value()));
            }
        }
    };
}

impl_container_op!(Add, add, AddAssign, add_assign);
impl_container_op!(Sub, sub, SubAssign, sub_assign);
impl_container_op!(Mul, mul, MulAssign, mul_assign);
impl_container_op!(Div, div, DivAssign, div_assign);
impl_container_op!(Rem, rem, RemAssign, rem_assign);

/// `container OP raw`, `raw OP container` and `container OP= raw` for one
/// primitive raw value type
macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl_scalar_op!($t, Add, add, AddAssign, add_assign);
            impl_scalar_op!($t, Sub, sub, SubAssign, sub_assign);
            impl_scalar_op!($t, Mul, mul, MulAssign, mul_assign);
            impl_scalar_op!($t, Div, div, DivAssign, div_assign);
            impl_scalar_op!($t, Rem, rem, RemAssign, rem_assign);
        )*
    };
}

macro_rules! impl_scalar_op {
    ($t:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<S> $Op<$t> for SemanticType<S>
        where
            S: GatewaySpec<RawValue = $t, Error = Infallible>,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: $t) -> Self {
                Self::new(self.into_raw_value().$op(rhs))
            }
        }

        impl<S> $Op<SemanticType<S>> for $t
        where
            S: GatewaySpec<RawValue = $t, Error = Infallible>,
        {
            type Output = SemanticType<S>;

            #[inline]
            fn $op(self, rhs: SemanticType<S>) -> SemanticType<S> {
                SemanticType::new(self.$op(rhs.into_raw_value()))
            }
        }

        impl<S> $OpAssign<$t> for SemanticType<S>
        where
            S: GatewaySpec<RawValue = $t, Error = Infallible>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $t) {
                self.mutating_map(|raw| raw.$op_assign(rhs));
            }
        }
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<S> Neg for SemanticType<S>
where
    S: Total,
    S::RawValue: Neg<Output = S::RawValue>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.into_raw_value())
    }
}

impl<S> Sum for SemanticType<S>
where
    S: Total,
    S::RawValue: Sum,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(SemanticType::into_raw_value).sum())
    }
}

impl<S> Product for SemanticType<S>
where
    S: Total,
    S::RawValue: Product,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(SemanticType::into_raw_value).product())
    }
}

impl<S: Total> SemanticType<S> {
    /// The container `step` away from this one
    ///
    /// ```
    /// use semantic_type_core::{ErrorlessSpec, SemanticType};
    ///
    /// enum DaySpec {}
    ///
    /// impl ErrorlessSpec for DaySpec {
    ///     type RawValue = u32;
    /// }
    ///
    /// let monday = SemanticType::<DaySpec>::new(1);
    /// assert_eq!(monday.advanced_by(2u32), SemanticType::new(3));
    /// ```
    pub fn advanced_by<N>(&self, step: N) -> Self
    where
        S::RawValue: Clone + Add<N, Output = S::RawValue>,
    {
        Self::new(self.raw_value().clone() + step)
    }

    /// How far `other` lies from this container, as `other - self`
    pub fn distance_to(&self, other: &Self) -> <S::RawValue as Sub>::Output
    where
        S::RawValue: Clone + Sub,
    {
        other.raw_value().clone() - self.raw_value().clone()
    }
}

// ============================================================================
// Tests
// ============================================================================
