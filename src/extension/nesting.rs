//! Flattening and transposition of nested containers.

use crate::optional::Optional;
use crate::outcome::Outcome;

/// Removes exactly one level of `Optional` nesting.
///
/// Deeper nesting needs one call per level.
///
/// # Examples
///
/// ```rust
/// use optres::extension::optional_flatten;
/// use optres::Optional;
///
/// let triple = Optional::Some(Optional::Some(Optional::Some(1)));
/// assert_eq!(optional_flatten(optional_flatten(triple)), Optional::Some(1));
///
/// let empty: Optional<Optional<i32>> = Optional::Some(Optional::None);
/// assert_eq!(optional_flatten(empty), Optional::None);
/// ```
#[inline]
pub fn optional_flatten<T>(nested: Optional<Optional<T>>) -> Optional<T> {
    match nested {
        Optional::Some(inner) => inner,
        Optional::None => Optional::None,
    }
}

/// Removes exactly one level of `Outcome` nesting.
///
/// An error at either level comes through as the error.
///
/// # Examples
///
/// ```rust
/// use optres::extension::outcome_flatten;
/// use optres::Outcome;
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
/// assert_eq!(outcome_flatten(nested), Outcome::Err("inner"));
/// ```
#[inline]
pub fn outcome_flatten<T, E>(nested: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    match nested {
        Outcome::Ok(inner) => inner,
        Outcome::Err(error) => Outcome::Err(error),
    }
}

/// Turns an optional outcome into an outcome of an optional.
///
/// | input               | output              |
/// |---------------------|---------------------|
/// | `None`              | `Ok(None)`          |
/// | `Some(Ok(v))`       | `Ok(Some(v))`       |
/// | `Some(Err(e))`      | `Err(e)`            |
#[inline]
pub fn optional_transpose<T, E>(optional: Optional<Outcome<T, E>>) -> Outcome<Optional<T>, E> {
    match optional {
        Optional::None => Outcome::Ok(Optional::None),
        Optional::Some(Outcome::Ok(value)) => Outcome::Ok(Optional::Some(value)),
        Optional::Some(Outcome::Err(error)) => Outcome::Err(error),
    }
}

/// Turns an outcome of an optional into an optional outcome.
///
/// Exact inverse of [`optional_transpose`].
#[inline]
pub fn outcome_transpose<T, E>(outcome: Outcome<Optional<T>, E>) -> Optional<Outcome<T, E>> {
    match outcome {
        Outcome::Ok(Optional::None) => Optional::None,
        Outcome::Ok(Optional::Some(value)) => Optional::Some(Outcome::Ok(value)),
        Outcome::Err(error) => Optional::Some(Outcome::Err(error)),
    }
}
