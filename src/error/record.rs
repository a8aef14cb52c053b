//! The `Error` record carried by failed results.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ErrorKind;

/// An immutable `{ code, message }` pair describing one failed operation.
///
/// `Error` is the right-hand payload of every [`Result`](crate::Result) and
/// the payload of a failed [`ErrorOrNot`](crate::ErrorOrNot). It is plain
/// data: it never wraps a source error and is never propagated by this crate.
///
/// The message is a `Cow<'static, str>`, so both string literals and owned
/// strings are accepted without forcing an allocation for the common
/// literal case.
///
/// ## Example
///
/// ```rust
/// use sumtypes::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::InvalidArgument, "x must not be 0");
/// assert_eq!(err.code(), ErrorKind::InvalidArgument);
/// assert_eq!(err.message(), "x must not be 0");
/// assert_eq!(err.to_string(), "invalid argument: x must not be 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    /// The error category.
    code: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(code: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The sentinel record stored by a successful [`ErrorOrNot`](crate::ErrorOrNot).
    ///
    /// Its code is [`ErrorKind::NoError`] and its message is empty. It does
    /// not describe anything and must not be interpreted as a failure.
    pub const fn none() -> Self {
        Self {
            code: ErrorKind::NoError,
            message: Cow::Borrowed(""),
        }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(code: ErrorKind) -> Self {
        let message = match code {
            ErrorKind::NoError => "",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::ValidationFailed => "validation failed",
            ErrorKind::Internal => "internal error",
            ErrorKind::Unknown => "unknown error",
        };
        Self::new(code, message)
    }

    /// Returns the error kind.
    #[inline]
    pub fn code(&self) -> ErrorKind {
        self.code
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this is the [`Error::none`] sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.code.is_error()
    }

    /// Splits the record into its kind and message.
    pub fn into_parts(self) -> (ErrorKind, Cow<'static, str>) {
        (self.code, self.message)
    }

    // Convenience constructors for common error types

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a validation failed error.
    pub fn validation_failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ValidationFailed, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}
