//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::Optional;
//! use optres::typeclass::Functor;
//!
//! let transformed: Optional<String> = Optional::Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Optional::Some("5".to_string()));
//!
//! let none_value: Optional<i32> = Optional::None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), Optional::None);
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for types that can have a function mapped over their contents.
///
/// For [`Optional`] and [`Outcome`] this is the inherent `map`, lifted to a
/// trait so generic code can rely on it.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Outcome;
    /// use optres::typeclass::Functor;
    ///
    /// let good: Outcome<i32, String> = Outcome::Ok(5);
    /// assert_eq!(good.fmap(|n| n * 2), Outcome::Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor itself is left untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    /// use optres::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Some(5).map_to("replaced"), Optional::Some("replaced"));
    /// assert_eq!(Optional::<i32>::None.map_to("replaced"), Optional::None);
    /// ```
    #[inline]
    fn map_to<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.map_to(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error.clone()),
        }
    }
}
