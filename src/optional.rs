//! Some-or-None container.
//!
//! [`Optional<T>`] follows the same construct/query/unchecked-read contract
//! as [`Either`](crate::Either), with a single payload slot that is absent
//! in the `None` case. It is a separate type from `core::option::Option` so
//! the blind [`unwrap_unchecked`](Optional::unwrap_unchecked) stays explicit,
//! and converts to and from it freely.

#![allow(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Either `Some(T)` or `None`.
///
/// ## Example
///
/// ```rust
/// use sumtypes::Optional;
///
/// let none: Optional<i32> = Optional::none();
/// assert!(!none.is_some());
///
/// let some = Optional::some(5);
/// assert!(some.is_some());
/// // SAFETY: `some` was just constructed as `Some`.
/// assert_eq!(unsafe { some.unwrap_unchecked() }, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> Optional<T> {
    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// The empty container.
    #[inline]
    pub const fn none() -> Self {
        Optional::None
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns a reference to the value, if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }

    /// Borrows the value without checking that one is present.
    ///
    /// # Safety
    ///
    /// `self` must be `Some`. Calling this on `None` is undefined behavior.
    /// Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.is_some(), "get_unchecked called on Optional::None");
        match self {
            Optional::Some(v) => v,
            // SAFETY: the caller guarantees `self` is `Some`.
            Optional::None => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Consumes `self` and returns the value without checking that one is present.
    ///
    /// # Safety
    ///
    /// `self` must be `Some`. Calling this on `None` is undefined behavior.
    /// Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_some(), "unwrap_unchecked called on Optional::None");
        match self {
            Optional::Some(v) => v,
            // SAFETY: the caller guarantees `self` is `Some`.
            Optional::None => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Transforms a present value.
    pub fn map<F, U>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(v) => Optional::Some(f(v)),
            Optional::None => Optional::None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Optional::Some(v),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        opt.into_option()
    }
}
