//! Optional type - a value or nothing.
//!
//! This module provides [`Optional<T>`], which is either `Some(T)` holding
//! exactly one value or `None` holding nothing. It is a stand-alone tagged
//! union: the variant is chosen at construction and no representation can
//! hold both or neither.
//!
//! # Examples
//!
//! ```rust
//! use optres::Optional;
//!
//! let found = Optional::Some(15)
//!     .filter(|value| *value > 10)
//!     .map(|value| format!("Value={value}"));
//! assert_eq!(found, Optional::Some("Value=15".to_string()));
//!
//! let filtered = Optional::Some(5).filter(|value| *value > 10);
//! assert!(filtered.is_none());
//! ```
//!
//! # Failure semantics
//!
//! [`Optional::expect`] and [`Optional::unwrap`] are the only operations
//! that can fail. They panic; every other operation is total.

use crate::failure::{OPTIONAL_UNWRAP_NONE, contract_violation};
use crate::outcome::Outcome;
use crate::predicate::same_instance;

/// A value or nothing.
///
/// `Some` wraps the fact that a value was supplied, whatever that value is:
/// `Optional::Some(0)` and `Optional::Some(String::new())` are `Some`.
///
/// # Examples
///
/// ```rust
/// use optres::Optional;
///
/// fn find_user(id: i64) -> Optional<&'static str> {
///     if id < 0 { Optional::None } else { Optional::Some("alice") }
/// }
///
/// assert!(find_user(-1).is_none());
/// assert_eq!(find_user(7).unwrap(), "alice");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    None,
    /// Exactly one value of type `T`.
    Some(T),
}

/// Creates `Optional::Some(value)`.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates `Optional::None`.
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

/// Creates an `Optional` from a possibly-absent reference.
///
/// See [`Optional::from_ref`].
#[inline]
pub fn optional_from_ref<T: Clone>(reference: Option<&T>) -> Optional<T> {
    Optional::from_ref(reference)
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Optional` from a possibly-absent reference.
    ///
    /// Returns `None` when the reference is absent, otherwise `Some` holding a
    /// clone of the referenced value. This is the one constructor that
    /// inspects its input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// let name = String::from("alice");
    /// assert_eq!(Optional::from_ref(Some(&name)), Optional::Some(name.clone()));
    /// assert_eq!(Optional::<String>::from_ref(None), Optional::None);
    /// ```
    #[inline]
    pub fn from_ref(reference: Option<&T>) -> Self
    where
        T: Clone,
    {
        reference.map_or(Self::None, |value| Self::Some(value.clone()))
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    ///
    /// The predicate is never invoked for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// assert!(Optional::Some("SOME").is_some_and(|value| value.len() == 4));
    /// assert!(!Optional::Some("SOME").is_some_and(|value| value.len() == 3));
    /// assert!(!Optional::<&str>::None.is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `None` or the value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// assert!(Optional::<&str>::None.is_none_or(|_| false));
    /// assert!(Optional::Some("SOME").is_none_or(|value| value.len() == 4));
    /// assert!(!Optional::Some("SOME").is_none_or(|value| value.len() == 3));
    /// ```
    #[inline]
    pub fn is_none_or<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Compares two optionals by identity, for payloads without `PartialEq`.
    ///
    /// Structural equality (`==`) is only available when `T: PartialEq`.
    /// This method works for any `T` and is deliberately non-structural:
    ///
    /// - two `None` values are equal
    /// - a `Some` and a `None` are never equal
    /// - a `Some` is equal to itself (the same instance)
    /// - two distinct `Some` instances are never equal, even when their
    ///   payloads look identical
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// struct Handle(u32);
    ///
    /// let first = Optional::Some(Handle(1));
    /// let second = Optional::Some(Handle(1));
    /// assert!(first.identity_eq(&first));
    /// assert!(!first.identity_eq(&second));
    /// assert!(Optional::<Handle>::None.identity_eq(&Optional::None));
    /// ```
    #[inline]
    pub fn identity_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Some(_), Self::Some(_)) => same_instance(self, other),
            _ => false,
        }
    }

    /// Compares two optionals with an explicit comparator for the payloads.
    ///
    /// `None` equals `None`, `Some` never equals `None`, and two `Some`
    /// values are equal when `comparator` says so.
    #[inline]
    pub fn equal_by<F>(&self, other: &Self, comparator: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Some(left), Self::Some(right)) => comparator(left, right),
            _ => false,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// `None` stays `None`; `Some(v)` stays `Some(v)` when `predicate(&v)`
    /// holds and becomes `None` otherwise.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Calls `function` with the value if this is `Some`, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::Some(3).inspect(|value| seen.push(*value));
    /// assert_eq!(value, Optional::Some(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// assert_eq!(Optional::Some("SOME").expect("oops"), "SOME");
    /// ```
    ///
    /// ```should_panic
    /// use optres::Optional;
    ///
    /// Optional::<&str>::None.expect("value must be configured");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => contract_violation(message),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with [`OPTIONAL_UNWRAP_NONE`](crate::failure::OPTIONAL_UNWRAP_NONE)
    /// if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(OPTIONAL_UNWRAP_NONE)
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or the result of `supplier`.
    ///
    /// `supplier` is only invoked for `None`.
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Returns the contained value or `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// assert_eq!(Optional::Some(7).unwrap_or_default(), 7);
    /// assert_eq!(Optional::<String>::None.unwrap_or_default(), "");
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Returns `other` if this is `None`, otherwise returns `self`.
    ///
    /// This short-circuits on the `None` side: a `Some` always wins over
    /// `other`. Note that this differs from `std::option::Option::and`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// assert_eq!(Optional::Some("SOME").and(Optional::Some("OTHER")), Optional::Some("SOME"));
    /// assert_eq!(Optional::None.and(Optional::Some("OTHER")), Optional::Some("OTHER"));
    /// assert_eq!(Optional::<&str>::None.and(Optional::None), Optional::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Chains an `Optional`-returning computation.
    ///
    /// `None` propagates without calling `function`.
    #[inline]
    pub fn and_then<V, F>(self, function: F) -> Optional<V>
    where
        F: FnOnce(T) -> Optional<V>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Transforms the contained value.
    #[inline]
    pub fn map<V, F>(self, function: F) -> Optional<V>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Transforms the contained value or returns `default`, ending the chain.
    ///
    /// The result is not wrapped: `Some(v)` yields `function(v)` and `None`
    /// yields `default` as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// assert_eq!(Optional::Some("abc").map_or(0, str::len), 3);
    /// assert_eq!(Optional::<&str>::None.map_or(0, str::len), 0);
    /// ```
    #[inline]
    pub fn map_or<V, F>(self, default: V, function: F) -> V
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Transforms the contained value or computes a fallback, ending the chain.
    ///
    /// `default` is only invoked for `None`.
    #[inline]
    pub fn map_or_else<V, D, F>(self, default: D, function: F) -> V
    where
        D: FnOnce() -> V,
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default(),
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `supplier`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => supplier(),
        }
    }

    /// Merges two optionals.
    ///
    /// Two `Some` values are merged with `combine`; a single `Some` is
    /// returned unchanged; two `None` give `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// let add = |left: i32, right: i32| left + right;
    /// assert_eq!(Optional::Some(1).reduce(Optional::Some(2), add), Optional::Some(3));
    /// assert_eq!(Optional::Some(1).reduce(Optional::None, add), Optional::Some(1));
    /// assert_eq!(Optional::None.reduce(Optional::Some(2), add), Optional::Some(2));
    /// assert_eq!(Optional::None.reduce(Optional::None, add), Optional::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn reduce<F>(self, other: Self, combine: F) -> Self
    where
        F: FnOnce(T, T) -> T,
    {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(combine(left, right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }

    /// Overwrites this optional with `Some(value)` in place and returns it.
    ///
    /// This is the one mutating operation on `Optional`. The previous state,
    /// whichever variant it was, is dropped. Requiring `&mut self` means no
    /// other reference can observe the container while it changes; sharing a
    /// container across threads and replacing it needs a caller-provided lock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// let mut slot = Optional::None;
    /// slot.replace(5).replace(6);
    /// assert_eq!(slot, Optional::Some(6));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> &mut Self {
        *self = Self::Some(value);
        self
    }

    /// Takes the value out, leaving `None` in its place.
    #[inline]
    #[must_use]
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::None)
    }

    /// Returns the one `Some` among `self` and `other`, or `None`.
    ///
    /// | self    | other   | result  |
    /// |---------|---------|---------|
    /// | Some(a) | Some(b) | None    |
    /// | Some(a) | None    | Some(a) |
    /// | None    | Some(b) | Some(b) |
    /// | None    | None    | None    |
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Conversion to Outcome
    // =========================================================================

    /// Converts into an [`Outcome`], using `error` for `None`.
    ///
    /// `error` is evaluated eagerly by the caller; use
    /// [`Optional::ok_or_else`] when building it is expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::Some(1).ok_or("missing"), Outcome::Ok(1));
    /// assert_eq!(Optional::<i32>::None.ok_or("missing"), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts into an [`Outcome`], computing the error only for `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error()),
        }
    }

    // =========================================================================
    // References and Iteration
    // =========================================================================

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Mutably borrows the contained value.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Returns an iterator over the zero or one contained values.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::from(self.as_ref()).into_iter()
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
