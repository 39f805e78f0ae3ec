//! Shared predicate and equality utilities.
//!
//! Every inspection operation on [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome) (`is_some_and`, `filter`, `is_err_and`, ...)
//! accepts a single-argument callback returning `bool`. This module names that
//! shape as [`Predicate`] and provides combinators for building predicates
//! out of smaller ones.
//!
//! # Examples
//!
//! ```rust
//! use optres::predicate::{Predicate, equal_to};
//! use optres::Optional;
//!
//! let large = |value: &i32| *value > 10;
//! let not_twenty = equal_to(20).negate();
//! let wanted = large.and(not_twenty);
//!
//! assert!(Optional::Some(15).is_some_and(&wanted));
//! assert!(!Optional::Some(20).is_some_and(&wanted));
//! assert!(!Optional::Some(5).is_some_and(&wanted));
//! ```

/// A reusable test over borrowed values.
///
/// Blanket-implemented for every `Fn(&T) -> bool`, so closures and function
/// items are predicates without any wrapping.
pub trait Predicate<T: ?Sized>: Fn(&T) -> bool {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }

    /// Returns a predicate that holds exactly when `self` does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::predicate::Predicate;
    ///
    /// let empty = |text: &str| text.is_empty();
    /// let non_empty = empty.negate();
    /// assert!(non_empty.test("hello"));
    /// assert!(!non_empty.test(""));
    /// ```
    #[inline]
    fn negate(self) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        move |value| !self(value)
    }

    /// Returns a predicate that holds when both `self` and `other` hold.
    ///
    /// `other` is not evaluated when `self` is false.
    #[inline]
    fn and<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Predicate<T>,
    {
        move |value| self(value) && other(value)
    }

    /// Returns a predicate that holds when either `self` or `other` holds.
    ///
    /// `other` is not evaluated when `self` is true.
    #[inline]
    fn or<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Predicate<T>,
    {
        move |value| self(value) || other(value)
    }
}

impl<T: ?Sized, F> Predicate<T> for F where F: Fn(&T) -> bool {}

/// Returns a predicate that compares its argument with `expected` using `==`.
///
/// # Examples
///
/// ```rust
/// use optres::predicate::{Predicate, equal_to};
///
/// let is_answer = equal_to(42);
/// assert!(is_answer.test(&42));
/// assert!(!is_answer.test(&7));
/// ```
#[inline]
pub fn equal_to<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value| *value == expected
}

/// A predicate that accepts every value.
#[inline]
pub const fn always<T: ?Sized>(_value: &T) -> bool {
    true
}

/// A predicate that rejects every value.
#[inline]
pub const fn never<T: ?Sized>(_value: &T) -> bool {
    false
}

/// Returns `true` if `left` and `right` are the same instance in memory.
///
/// This is identity, not equality: two distinct values with identical
/// contents compare unequal. Zero-sized values have no distinct addresses,
/// so the result for them is unspecified.
///
/// # Examples
///
/// ```rust
/// use optres::predicate::same_instance;
///
/// let first = vec![1, 2, 3];
/// let second = vec![1, 2, 3];
/// assert!(same_instance(&first, &first));
/// assert!(!same_instance(&first, &second));
/// ```
#[inline]
pub fn same_instance<T: ?Sized>(left: &T, right: &T) -> bool {
    std::ptr::eq(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, false)]
    #[case(11, true)]
    fn test_closure_is_predicate(#[case] value: i32, #[case] expected: bool) {
        let greater_than_ten = |candidate: &i32| *candidate > 10;
        assert_eq!(greater_than_ten.test(&value), expected);
    }

    #[rstest]
    fn test_negate_inverts_result() {
        let even = |value: &i32| value % 2 == 0;
        let odd = even.negate();
        assert!(odd.test(&3));
        assert!(!odd.test(&4));
    }

    #[rstest]
    fn test_and_short_circuits() {
        let calls = std::cell::Cell::new(0);
        let rejecting = |_: &i32| false;
        let counting = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };
        let combined = rejecting.and(counting);
        assert!(!combined.test(&1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_accepts_either_side() {
        let small = |value: &i32| *value < 0;
        let large = |value: &i32| *value > 100;
        let outside = small.or(large);
        assert!(outside.test(&-1));
        assert!(outside.test(&101));
        assert!(!outside.test(&50));
    }

    #[rstest]
    fn test_always_and_never() {
        assert!(always(&"anything"));
        assert!(!never(&"anything"));
    }

    #[rstest]
    fn test_same_instance_is_identity() {
        let first = String::from("value");
        let second = String::from("value");
        assert!(same_instance(&first, &first));
        assert!(!same_instance(&first, &second));
    }
}
