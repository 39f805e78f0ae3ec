//! Outcome type - a success value or an error.
//!
//! This module provides [`Outcome<T, E>`], which is either `Ok(T)` holding a
//! success value or `Err(E)` holding an error. The error type defaults to
//! [`BoxError`], so `Outcome<T>` reads like a fallible return of any error.
//!
//! # Examples
//!
//! ```rust
//! use optres::Outcome;
//!
//! let doubled: Outcome<i32, &str> = Outcome::Ok(3);
//! assert_eq!(
//!     doubled.map(|value| value * 2).map(|value| value.to_string()),
//!     Outcome::Ok("6".to_string())
//! );
//!
//! let failed: Outcome<i32, &str> = Outcome::Err("boom");
//! assert_eq!(
//!     failed.map(|value| value * 2).map(|value| value.to_string()),
//!     Outcome::Err("boom")
//! );
//! ```
//!
//! # Failure semantics
//!
//! [`Outcome::expect`], [`Outcome::unwrap`], [`Outcome::expect_err`] and
//! [`Outcome::unwrap_err`] panic when called on the wrong variant. Every
//! other operation is total. The `Err` payload itself is ordinary data and
//! is never logged or escalated by this crate.

use crate::failure::{OUTCOME_UNWRAP_ERR, OUTCOME_UNWRAP_ERR_ON_OK, contract_violation};
use crate::optional::Optional;

/// The default error type of [`Outcome`]: any boxed, thread-safe error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A success value or an error.
///
/// # Examples
///
/// ```rust
/// use optres::{BoxError, Outcome};
///
/// fn parse(text: &str) -> Outcome<i32> {
///     Outcome::from(text.parse::<i32>().map_err(BoxError::from))
/// }
///
/// assert_eq!(parse("42").unwrap(), 42);
/// assert!(parse("forty-two").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E = BoxError> {
    /// A success value.
    Ok(T),
    /// An error value.
    Err(E),
}

/// Creates `Outcome::Ok(value)`.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates `Outcome::Err(error)`.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Adapts a value-plus-optional-error pair into an [`Outcome`].
///
/// See [`Outcome::from_return`].
#[inline]
pub fn outcome_from_return<T, E>(value: T, error: Option<E>) -> Outcome<T, E> {
    Outcome::from_return(value, error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Adapts a value-plus-optional-error pair into an `Outcome`.
    ///
    /// A present error always wins and `value` is dropped. Without an error
    /// the result is `Ok(value)`, whatever `value` is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Outcome;
    ///
    /// assert_eq!(Outcome::from_return(7, Some("failed")), Outcome::Err("failed"));
    /// assert_eq!(Outcome::<Option<i32>, &str>::from_return(None, None), Outcome::Ok(None));
    /// ```
    #[inline]
    pub fn from_return(value: T, error: Option<E>) -> Self {
        error.map_or(Self::Ok(value), Self::Err)
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    ///
    /// The predicate is never invoked for `Err`.
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("error_message");
    /// assert!(failed.is_err_and(|error| *error == "error_message"));
    /// assert!(!Outcome::<i32, &str>::Ok(1).is_err_and(|_| true));
    /// ```
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Calls `function` with the success value if this is `Ok`, then returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the error if this is `Err`, then returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => contract_violation(message),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`OUTCOME_UNWRAP_ERR`](crate::failure::OUTCOME_UNWRAP_ERR)
    /// if this is `Err`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use optres::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("boom");
    /// failed.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(OUTCOME_UNWRAP_ERR)
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => contract_violation(message),
            Self::Err(error) => error,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with
    /// [`OUTCOME_UNWRAP_ERR_ON_OK`](crate::failure::OUTCOME_UNWRAP_ERR_ON_OK)
    /// if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        self.expect_err(OUTCOME_UNWRAP_ERR_ON_OK)
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// `fallback` is only invoked for `Err`, and it receives the error by
    /// value. A fallback that does not need the error ignores its argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Outcome;
    ///
    /// let failed: Outcome<usize, &str> = Outcome::Err("four");
    /// assert_eq!(failed.unwrap_or_else(str::len), 4);
    ///
    /// let failed: Outcome<usize, &str> = Outcome::Err("ignored");
    /// assert_eq!(failed.unwrap_or_else(|_| 0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => fallback(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the success value, leaving an error untouched.
    #[inline]
    pub fn map<V, F>(self, function: F) -> Outcome<V, E>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error, leaving a success value untouched.
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Transforms the success value, or substitutes `default` for an error.
    ///
    /// Unlike [`Optional::map_or`], the result stays wrapped and is always
    /// `Ok`: `Ok(v)` gives `Ok(function(v))` and `Err(_)` gives `Ok(default)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Outcome;
    ///
    /// let good: Outcome<i32, &str> = Outcome::Ok(3);
    /// assert_eq!(good.map_or("DEFAULT".to_string(), |n| "A".repeat(n as usize)), Outcome::Ok("AAA".to_string()));
    ///
    /// let bad: Outcome<i32, &str> = Outcome::Err("error");
    /// assert_eq!(bad.map_or("DEFAULT".to_string(), |n| "A".repeat(n as usize)), Outcome::Ok("DEFAULT".to_string()));
    /// ```
    #[inline]
    pub fn map_or<V, F>(self, default: V, function: F) -> Outcome<V, E>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(_) => Outcome::Ok(default),
        }
    }

    /// Transforms the success value, or recovers a value from the error.
    ///
    /// Like [`Outcome::map_or`] the result is always `Ok`.
    #[inline]
    pub fn map_or_else<V, D, F>(self, default: D, function: F) -> Outcome<V, E>
    where
        D: FnOnce(E) -> V,
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Ok(default(error)),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns `self` if it is `Ok`, otherwise the result of `function` on the error.
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise propagates the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Outcome;
    ///
    /// let first: Outcome<i32, &str> = Outcome::Ok(5);
    /// assert_eq!(first.and(Outcome::Ok("OTHER")), Outcome::Ok("OTHER"));
    ///
    /// let first: Outcome<i32, &str> = Outcome::Err("ERROR");
    /// assert_eq!(first.and(Outcome::Ok("OTHER")), Outcome::Err("ERROR"));
    /// ```
    #[inline]
    pub fn and<V>(self, other: Outcome<V, E>) -> Outcome<V, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a fallible computation, short-circuiting on the first error.
    #[inline]
    pub fn and_then<V, F>(self, function: F) -> Outcome<V, E>
    where
        F: FnOnce(T) -> Outcome<V, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Conversion to Optional
    // =========================================================================

    /// Returns `Some(value)` for `Ok`, dropping any error.
    ///
    /// To keep the outcome, convert a borrow: `outcome.as_ref().ok()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Optional, Outcome};
    ///
    /// let good: Outcome<&str, &str> = Outcome::Ok("value");
    /// assert_eq!(good.as_ref().ok(), Optional::Some(&"value"));
    /// assert_eq!(good.ok(), Optional::Some("value"));
    /// ```
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Err(_) => Optional::None,
        }
    }

    /// Returns `Some(error)` for `Err`, dropping any success value.
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::None,
            Self::Err(error) => Optional::Some(error),
        }
    }

    // =========================================================================
    // References and Iteration
    // =========================================================================

    /// Borrows both slots.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows both slots.
    #[inline]
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns an iterator over the success value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::from(self.as_ref().ok()).into_iter()
    }

    /// Converts into a standard library `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when this is `Outcome::Err(error)`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self.ok()).into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_error_type_is_boxed() {
        let failed: Outcome<i32> = Outcome::Err("boxed".into());
        assert_eq!(failed.unwrap_err().to_string(), "boxed");
    }

    #[rstest]
    fn test_as_mut_modifies_success_value() {
        let mut outcome: Outcome<i32, String> = Outcome::Ok(1);
        if let Outcome::Ok(value) = outcome.as_mut() {
            *value = 2;
        }
        assert_eq!(outcome, Outcome::Ok(2));
    }

    #[rstest]
    #[case(7, Some("failed"), Outcome::Err("failed"))]
    #[case(7, None, Outcome::Ok(7))]
    #[case(0, None, Outcome::Ok(0))]
    fn test_from_return_error_wins(
        #[case] value: i32,
        #[case] error: Option<&'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        assert_eq!(Outcome::from_return(value, error), expected);
    }

    #[rstest]
    fn test_into_result_keeps_error() {
        let failed: Outcome<i32, &str> = Outcome::Err("no");
        assert_eq!(failed.into_result(), Err("no"));
    }

    #[rstest]
    fn test_std_result_roundtrip() {
        let outcome: Outcome<i32, String> = Err("error".to_string()).into();
        assert_eq!(outcome, Outcome::Err("error".to_string()));
        assert_eq!(outcome.into_result(), Err("error".to_string()));
    }

    #[rstest]
    fn test_iteration_skips_errors() {
        let good: Outcome<i32, &str> = Outcome::Ok(1);
        let bad: Outcome<i32, &str> = Outcome::Err("no");
        assert_eq!(good.into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(bad.iter().count(), 0);
    }
}
