//! Foldable type class - folding structures into summary values.
//!
//! Both containers hold zero or one element, so folding either applies the
//! function once or returns the initial accumulator.
//!
//! # Examples
//!
//! ```rust
//! use optres::{Optional, Outcome};
//! use optres::typeclass::Foldable;
//!
//! assert_eq!(Optional::Some(5).fold_left(10, |accumulator, n| accumulator + n), 15);
//! assert_eq!(Optional::<i32>::None.fold_left(10, |accumulator, n| accumulator + n), 10);
//!
//! let failed: Outcome<i32, &str> = Outcome::Err("e");
//! assert_eq!(failed.length(), 0);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Foldable;
    ///
    /// let text: String = Optional::Some(3).fold_map(|n| "x".repeat(n));
    /// assert_eq!(text, "xxx");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure holds no element.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements held.
    fn length(&self) -> usize;

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Optional<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Optional::None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Optional::Some(element)
            } else {
                Optional::None
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Foldable for Optional<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(element) => function(init, element),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(element) => function(element, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.is_some_and(predicate)
    }

    #[inline]
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.is_none_or(predicate)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Outcome<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Ok(element) => function(init, element),
            Self::Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Ok(element) => function(element, init),
            Self::Err(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_err()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.is_ok_and(predicate)
    }

    #[inline]
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Self::Ok(element) => predicate(element),
            Self::Err(_) => true,
        }
    }
}
