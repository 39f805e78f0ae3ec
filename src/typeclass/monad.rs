//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, so that each step of a
//! chain can depend on the value produced by the previous one. For
//! [`Optional`] and [`Outcome`] it is the inherent `and_then`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::Optional;
//! use optres::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Optional::Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Optional::Some(n * 2));
//! assert_eq!(result, Optional::Some(84));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` (`None` or `Err`) propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Monad;
    ///
    /// assert_eq!(Optional::Some(5).then(Optional::Some("hello")), Optional::Some("hello"));
    /// assert_eq!(Optional::<i32>::None.then(Optional::Some("hello")), Optional::None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}
