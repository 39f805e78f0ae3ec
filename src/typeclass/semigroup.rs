//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::Optional;
//! use optres::typeclass::Semigroup;
//!
//! let left = Optional::Some(String::from("Hello, "));
//! let right = Optional::Some(String::from("World!"));
//! assert_eq!(left.combine(right), Optional::Some(String::from("Hello, World!")));
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that falls
    /// back to the identity element, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(words), Optional::Some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), Optional::None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Optional<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
            .into()
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Optional Implementation
// =============================================================================

/// Optional forms a semigroup when its inner type is a semigroup.
///
/// This is [`Optional::reduce`] with [`Semigroup::combine`]:
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        self.reduce(other, Semigroup::combine)
    }
}

// =============================================================================
// Outcome Implementation
// =============================================================================

/// Outcome forms a semigroup when its success type is a semigroup.
///
/// - `Ok(a).combine(Ok(b))` = `Ok(a.combine(b))`
/// - `Err(e).combine(_)` = `Err(e)` (first error wins)
/// - `Ok(_).combine(Err(e))` = `Err(e)`
impl<T: Semigroup, E> Semigroup for Outcome<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Ok(left), Self::Ok(right)) => Self::Ok(left.combine(right)),
            (Self::Err(error), _) | (_, Self::Err(error)) => Self::Err(error),
        }
    }
}
