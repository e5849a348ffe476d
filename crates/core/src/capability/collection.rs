//! Collection access
//!
//! Reading a collection never changes it, so iteration by reference,
//! consuming iteration and indexing are available for every contract.
//!
//! Writing is another matter. There is no `IndexMut` and no `&mut` iteration:
//! a caller holding `&mut T` to an element could break the invariant without
//! the gateway ever noticing. Element writes instead go through the mutation
//! pipeline ([`set_element`](SemanticType::set_element),
//! [`modify_element`](SemanticType::modify_element)), and building a container
//! from an iterator needs a total gateway.

use crate::container::SemanticType;
use crate::spec::{GatewaySpec, Total};
use std::ops::{Index, IndexMut};

impl<'a, S: GatewaySpec> IntoIterator for &'a SemanticType<S>
where
    &'a S::RawValue: IntoIterator,
{
    type Item = <&'a S::RawValue as IntoIterator>::Item;
    type IntoIter = <&'a S::RawValue as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.raw_value().into_iter()
    }
}

impl<S: GatewaySpec> IntoIterator for SemanticType<S>
where
    S::RawValue: IntoIterator,
{
    type Item = <S::RawValue as IntoIterator>::Item;
    type IntoIter = <S::RawValue as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_raw_value().into_iter()
    }
}

impl<S: GatewaySpec, I> Index<I> for SemanticType<S>
where
    S::RawValue: Index<I>,
{
    type Output = <S::RawValue as Index<I>>::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.raw_value().index(index)
    }
}

impl<S, A> FromIterator<A> for SemanticType<S>
where
    S: Total,
    S::RawValue: FromIterator<A>,
{
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S, A> Extend<A> for SemanticType<S>
where
    S: Total,
    S::RawValue: Extend<A> + Clone,
{
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        self.mutating_map(|raw| raw.extend(iter));
    }
}

impl<S: Total> SemanticType<S> {
    /// Overwrite one element, then pass the whole collection through the
    /// gateway again
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for the raw value, as the raw
    /// value's own `IndexMut` would. The container is unchanged in that case.
    pub fn set_element<I>(&mut self, index: I, value: <S::RawValue as Index<I>>::Output)
    where
        S::RawValue: IndexMut<I> + Clone,
        <S::RawValue as Index<I>>::Output: Sized,
    {
        self.mutating_map(|raw| raw[index] = value);
    }

    /// Mutate one element in place, then pass the whole collection through the
    /// gateway again
    ///
    /// # Panics
    ///
    /// Same as [`set_element`](Self::set_element).
    pub fn modify_element<I, F>(&mut self, index: I, mutation: F)
    where
        S::RawValue: IndexMut<I> + Clone,
        F: FnOnce(&mut <S::RawValue as Index<I>>::Output),
    {
        self.mutating_map(|raw| mutation(&mut raw[index]));
    }
}
