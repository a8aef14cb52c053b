//! Error-carrying result built on [`Either`].
//!
//! [`Result<T>`] is `Either<T, Error>` with a fixed convention: `Left` holds
//! the success value and `Right` holds the [`Error`]. The constructors and
//! queries below enforce that mapping, so callers never pick a side by hand.
//!
//! ```rust
//! use sumtypes::{ErrorKind, Result};
//!
//! fn divide(a: i32, x: i32) -> Result<i32> {
//!     if x == 0 {
//!         return Result::err(ErrorKind::InvalidArgument, "x must not be 0");
//!     }
//!     Result::ok(a / x)
//! }
//!
//! let res = divide(1, 0);
//! assert!(res.is_err());
//! assert_eq!(res.error().map(|e| e.message()), Some("x must not be 0"));
//! ```
//!
//! This is a plain value, not a control-flow mechanism: nothing here
//! short-circuits. Use [`Either::into_std`] when a caller wants `?`.

#![allow(unsafe_code)]

use std::borrow::Cow;

use crate::either::Either;
use crate::error::{Error, ErrorKind};

/// `Either<T, Error>`: `Left` is success, `Right` is failure.
pub type Result<T> = Either<T, Error>;

impl<T> Either<T, Error> {
    /// Wraps a success value.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Either::Left(value)
    }

    /// Builds an [`Error`] from `code` and `message` and wraps it as a failure.
    pub fn err(code: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_error(Error::new(code, message))
    }

    /// Wraps an existing [`Error`] as a failure.
    pub fn from_error(error: Error) -> Self {
        #[cfg(feature = "tracing")]
        crate::tracing_support::error_constructed(&error, "result");
        Either::Right(error)
    }

    /// Returns `true` if this result holds a success value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.is_left()
    }

    /// Returns `true` if this result holds an [`Error`].
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_left()
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.left()
    }

    /// Returns the error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.right()
    }

    /// Consumes the result and returns the success value without checking.
    ///
    /// This is the blind unwrap: no panic, no check in release builds.
    /// Check [`is_err`](Self::is_err) first, or use [`value`](Self::value)
    /// or [`into_std`](Self::into_std) for a checked path.
    ///
    /// # Safety
    ///
    /// The result must be `Ok`. Calling this on an error result is undefined
    /// behavior. Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        // SAFETY: forwarded to the caller's guarantee that `self` is `Left`.
        unsafe { self.into_left_unchecked() }
    }

    /// Borrows the success value without checking.
    ///
    /// # Safety
    ///
    /// The result must be `Ok`; otherwise the behavior is undefined.
    #[inline]
    pub unsafe fn get_value_unchecked(&self) -> &T {
        // SAFETY: forwarded to the caller's guarantee that `self` is `Left`.
        unsafe { self.get_left_unchecked() }
    }

    /// Borrows the error without checking.
    ///
    /// # Safety
    ///
    /// The result must be an error; calling this on an `Ok` result is
    /// undefined behavior. Debug builds assert the discriminant first.
    #[inline]
    pub unsafe fn get_error_unchecked(&self) -> &Error {
        // SAFETY: forwarded to the caller's guarantee that `self` is `Right`.
        unsafe { self.get_right_unchecked() }
    }

    /// Converts into a standard library result.
    pub fn into_std(self) -> std::result::Result<T, Error> {
        match self {
            Either::Left(value) => Ok(value),
            Either::Right(error) => Err(error),
        }
    }

    /// Logs an error result at WARN level and returns `self` unchanged.
    ///
    /// Success values pass through without logging.
    #[cfg(feature = "tracing")]
    #[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
    pub fn traced(self, operation: &str) -> Self {
        if let Either::Right(ref error) = self {
            crate::tracing_support::error_observed(error, operation);
        }
        self
    }
}

impl<T> From<std::result::Result<T, Error>> for Either<T, Error> {
    fn from(res: std::result::Result<T, Error>) -> Self {
        match res {
            Ok(value) => Either::Left(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<Either<T, Error>> for std::result::Result<T, Error> {
    fn from(res: Either<T, Error>) -> Self {
        res.into_std()
    }
}
