//! Dynamic casting helpers.
//!
//! These functions sit at an explicit [`Any`] boundary: the caller has erased
//! a value's type and wants it back. They are an escape hatch for code that
//! stores heterogeneous values, not part of the container design.
//!
//! # Examples
//!
//! ```rust
//! use std::any::Any;
//! use optres::extension::{cast_or_default, must_cast};
//!
//! let boxed: Box<dyn Any> = Box::new(42_i32);
//! assert_eq!(must_cast::<i32>(boxed), 42);
//!
//! let boxed: Box<dyn Any> = Box::new("string");
//! assert_eq!(cast_or_default::<i32>(boxed), 0);
//! ```

use std::any::{Any, type_name};

use crate::failure::contract_violation;

/// Recovers a value of type `T` from a type-erased box.
///
/// # Panics
///
/// Panics with ``failed to cast value to `T` `` when the box does not hold a `T`.
#[track_caller]
pub fn must_cast<T: Any>(value: Box<dyn Any>) -> T {
    let Ok(value) = value.downcast::<T>() else {
        contract_violation(&cast_failure_message::<T>())
    };
    *value
}

/// Recovers a value of type `V` from a type-erased box, or `V::default()`.
///
/// Never fails.
pub fn cast_or_default<V: Any + Default>(value: Box<dyn Any>) -> V {
    value.downcast::<V>().map_or_else(|_| V::default(), |value| *value)
}

/// Borrows a type-erased value as `T`.
///
/// # Panics
///
/// Panics with ``failed to cast value to `T` `` when the value is not a `T`.
#[track_caller]
pub fn must_cast_ref<T: Any>(value: &dyn Any) -> &T {
    let Some(value) = value.downcast_ref::<T>() else {
        contract_violation(&cast_failure_message::<T>())
    };
    value
}

/// Borrows a type-erased value as `T`, or returns `fallback`.
///
/// # Examples
///
/// ```rust
/// use optres::extension::cast_ref_or;
///
/// let fallback = String::from("fallback");
/// let value = 7_u8;
/// assert_eq!(cast_ref_or::<String>(&value, &fallback), "fallback");
/// ```
pub fn cast_ref_or<'a, T: Any>(value: &'a dyn Any, fallback: &'a T) -> &'a T {
    value.downcast_ref::<T>().unwrap_or(fallback)
}

fn cast_failure_message<T>() -> String {
    format!("failed to cast value to `{}`", type_name::<T>())
}
