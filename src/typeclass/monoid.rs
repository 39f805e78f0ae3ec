//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::semigroup::Semigroup;
use crate::optional::Optional;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert_eq!(Optional::<String>::empty(), Optional::None);
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Monoid;
    ///
    /// let parts = vec![Optional::Some(vec![1]), Optional::None, Optional::Some(vec![2, 3])];
    /// assert_eq!(Optional::combine_all(parts), Optional::Some(vec![1, 2, 3]));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// `None` is the identity: combining with it returns the other side unchanged.
impl<T: Semigroup> Monoid for Optional<T> {
    fn empty() -> Self {
        Self::None
    }
}
