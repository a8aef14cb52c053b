//! Two-variant tagged union.
//!
//! [`Either<L, R>`] holds exactly one of a left payload or a right payload.
//! Every distinct `(L, R)` pair is a distinct type, so `Either<String, i32>`
//! and `Either<i32, String>` can never be confused.
//!
//! ## Accessors
//!
//! | Operation                | Checks discriminant | Misuse                 |
//! |--------------------------|---------------------|------------------------|
//! | [`is_left`]/[`is_right`] | n/a                 | always safe            |
//! | [`left`]/[`right`]       | yes                 | returns `None`         |
//! | `*_unchecked`            | no                  | **undefined behavior** |
//!
//! The unchecked accessors are `unsafe fn`. In debug builds they assert the
//! discriminant before reading; release builds perform no check.
//!
//! [`is_left`]: Either::is_left
//! [`is_right`]: Either::is_right
//! [`left`]: Either::left
//! [`right`]: Either::right

#![allow(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// ## Example
///
/// ```rust
/// use sumtypes::Either;
///
/// fn get_something(x: i32) -> Either<&'static str, i32> {
///     if x == 0 {
///         Either::new_left("Hello")
///     } else {
///         Either::new_right(0)
///     }
/// }
///
/// let a = get_something(0);
/// assert!(a.is_left());
/// assert_eq!(a.left(), Some(&"Hello"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum Either<L, R> {
    /// Left variant.
    Left(L),
    /// Right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps `value` as the left variant.
    #[inline]
    pub const fn new_left(value: L) -> Self {
        Either::Left(value)
    }

    /// Wraps `value` as the right variant.
    #[inline]
    pub const fn new_right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if the left variant is active.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if the right variant is active.
    #[inline]
    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Returns a reference to the left payload, or `None` if this is `Right`.
    #[inline]
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns a reference to the right payload, or `None` if this is `Left`.
    #[inline]
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Consumes `self`, returning the left payload if present.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Consumes `self`, returning the right payload if present.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Returns a reference to the left payload without checking the discriminant.
    ///
    /// # Safety
    ///
    /// `self` must be `Left`. Calling this on a `Right` value is undefined
    /// behavior. Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn get_left_unchecked(&self) -> &L {
        debug_assert!(self.is_left(), "get_left_unchecked called on Either::Right");
        match self {
            Either::Left(l) => l,
            // SAFETY: the caller guarantees `self` is `Left`.
            Either::Right(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns a reference to the right payload without checking the discriminant.
    ///
    /// # Safety
    ///
    /// `self` must be `Right`. Calling this on a `Left` value is undefined
    /// behavior. Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn get_right_unchecked(&self) -> &R {
        debug_assert!(self.is_right(), "get_right_unchecked called on Either::Left");
        match self {
            Either::Right(r) => r,
            // SAFETY: the caller guarantees `self` is `Right`.
            Either::Left(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Consumes `self` and returns the left payload without checking the discriminant.
    ///
    /// # Safety
    ///
    /// `self` must be `Left`. Calling this on a `Right` value is undefined
    /// behavior. Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn into_left_unchecked(self) -> L {
        debug_assert!(self.is_left(), "into_left_unchecked called on Either::Right");
        match self {
            Either::Left(l) => l,
            // SAFETY: the caller guarantees `self` is `Left`.
            Either::Right(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Consumes `self` and returns the right payload without checking the discriminant.
    ///
    /// # Safety
    ///
    /// `self` must be `Right`. Calling this on a `Left` value is undefined
    /// behavior. Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn into_right_unchecked(self) -> R {
        debug_assert!(self.is_right(), "into_right_unchecked called on Either::Left");
        match self {
            Either::Right(r) => r,
            // SAFETY: the caller guarantees `self` is `Right`.
            Either::Left(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Borrows the active payload.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transforms the left payload, leaving a right payload untouched.
    pub fn map_left<F, M>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transforms the right payload, leaving a left payload untouched.
    pub fn map_right<F, S>(self, f: F) -> Either<L, S>
    where
        F: FnOnce(R) -> S,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Collapses both variants into one value.
    pub fn either<F, G, T>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Swaps the variants: `Left(x)` becomes `Right(x)` and vice versa.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }
}
