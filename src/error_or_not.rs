//! Result type for operations with no success payload.

use std::borrow::Cow;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, ErrorKind};

/// Outcome of an operation that only reports whether it failed.
///
/// Use this instead of `Result<bool>` or `Optional<Error>` when success
/// carries nothing. There is no unwrap: callers branch on
/// [`is_error`](Self::is_error) and read [`error`](Self::error) on failure.
///
/// When `is_error()` is `false`, `error()` returns the [`Error::none`]
/// sentinel. It is not meaningful and must not be interpreted.
///
/// Deserialization enforces the same pairing: `is_error: false` must carry
/// the `no_error` sentinel and `is_error: true` a real kind. Any other
/// combination is rejected.
///
/// ## Example
///
/// ```rust
/// use sumtypes::{ErrorKind, ErrorOrNot};
///
/// fn check_name(name: &str) -> ErrorOrNot {
///     if name.is_empty() {
///         return ErrorOrNot::failure(ErrorKind::ValidationFailed, "name is empty");
///     }
///     ErrorOrNot::SUCCESS
/// }
///
/// assert!(!check_name("alice").is_error());
///
/// let outcome = check_name("");
/// assert!(outcome.is_error());
/// assert_eq!(outcome.error().code(), ErrorKind::ValidationFailed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[must_use]
pub struct ErrorOrNot {
    is_error: bool,
    error: Error,
}

impl ErrorOrNot {
    /// The successful outcome.
    pub const SUCCESS: ErrorOrNot = ErrorOrNot {
        is_error: false,
        error: Error::none(),
    };

    /// Returns the successful outcome.
    #[inline]
    pub const fn success() -> Self {
        Self::SUCCESS
    }

    /// Builds a failed outcome from `code` and `message`.
    pub fn failure(code: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_error(Error::new(code, message))
    }

    /// Wraps an existing [`Error`] as a failed outcome.
    pub fn from_error(error: Error) -> Self {
        #[cfg(feature = "tracing")]
        crate::tracing_support::error_constructed(&error, "error_or_not");
        Self {
            is_error: true,
            error,
        }
    }

    /// Returns `true` if the operation failed.
    #[inline]
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// Returns the stored error record.
    ///
    /// On success this is the [`ErrorKind::NoError`] sentinel.
    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Converts into `Result<(), Error>` from the standard library.
    pub fn into_std(self) -> std::result::Result<(), Error> {
        if self.is_error { Err(self.error) } else { Ok(()) }
    }
}

impl fmt::Display for ErrorOrNot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error {
            write!(f, "{}", self.error)
        } else {
            write!(f, "success")
        }
    }
}

/// Wire shape, checked before it becomes an `ErrorOrNot`.
#[derive(Deserialize)]
struct RawErrorOrNot {
    is_error: bool,
    error: Error,
}

impl<'de> Deserialize<'de> for ErrorOrNot {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawErrorOrNot::deserialize(deserializer)?;
        match (raw.is_error, raw.error.is_none()) {
            (false, true) => Ok(Self::SUCCESS),
            (true, false) => Ok(Self::from_error(raw.error)),
            (false, false) => Err(D::Error::custom(format!(
                "success outcome carries error `{}`",
                raw.error
            ))),
            (true, true) => Err(D::Error::custom(
                "failed outcome carries the no_error sentinel",
            )),
        }
    }
}

impl From<std::result::Result<(), Error>> for ErrorOrNot {
    fn from(res: std::result::Result<(), Error>) -> Self {
        match res {
            Ok(()) => Self::SUCCESS,
            Err(error) => Self::from_error(error),
        }
    }
}

impl From<ErrorOrNot> for std::result::Result<(), Error> {
    fn from(outcome: ErrorOrNot) -> Self {
        outcome.into_std()
    }
}
