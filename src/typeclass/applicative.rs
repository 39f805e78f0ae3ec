//! Applicative type class - applying functions within containers.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and `map2`, which combines two independent containers.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(f).apply(Self::pure(x)) == Self::pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::Optional;
//! use optres::typeclass::Applicative;
//!
//! let sum = Optional::Some(1).map2(Optional::Some(2), |x, y| x + y);
//! assert_eq!(sum, Optional::Some(3));
//!
//! let missing = Optional::Some(1).map2(Optional::<i32>::None, |x, y| x + y);
//! assert_eq!(missing, Optional::None);
//! ```

use super::functor::Functor;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for containers that can lift values and combine independent contents.
pub trait Applicative: Functor {
    /// Lifts a pure value into the container.
    ///
    /// `Some(value)` for [`Optional`], `Ok(value)` for [`Outcome`].
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// For [`Outcome`] the first error encountered, left to right, wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the contents of two containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Applicative;
    ///
    /// assert_eq!(Optional::Some(1).product(Optional::Some("a")), Optional::Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in `self` to the value held in `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some(function(a, b)),
            _ => Optional::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c)) => {
                Optional::Some(function(a, b, c))
            }
            _ => Optional::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Some(function), Optional::Some(b)) => Optional::Some(function(b)),
            _ => Optional::None,
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(function(a, b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Outcome::Ok(b), Outcome::Ok(c)) => Outcome::Ok(function(a, b, c)),
            (Self::Err(error), _, _) | (_, Outcome::Err(error), _) | (_, _, Outcome::Err(error)) => {
                Outcome::Err(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Ok(function), Outcome::Ok(b)) => Outcome::Ok(function(b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }
}
