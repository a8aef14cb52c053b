//! Error kind enumeration shared by every declared result type.

use serde::{Deserialize, Deserializer, Serialize};

/// Categorization of failures carried by [`Error`](crate::Error).
///
/// A single enumeration is shared by every [`Result`](crate::Result) and
/// [`ErrorOrNot`](crate::ErrorOrNot) in a program, so any producer and any
/// consumer agree on the meaning of a code.
///
/// | ErrorKind          | Code | Meaning                              |
/// |--------------------|------|--------------------------------------|
/// | `NoError`          | 0    | Sentinel, no failure occurred        |
/// | `InvalidArgument`  | 1    | Caller passed an unusable argument   |
/// | `NotFound`         | 2    | The requested item does not exist    |
/// | `ValidationFailed` | 3    | Input was well-formed but rejected   |
/// | `Internal`         | 4    | Unexpected failure inside the callee |
/// | `Unknown`          | 255  | A kind this build does not recognize |
///
/// The enum is `#[non_exhaustive]`: code matching on it must keep a wildcard
/// arm, and readers must treat kinds they do not recognize as valid.
/// Deserializing a kind name this build does not know yields
/// [`Unknown`](ErrorKind::Unknown) instead of failing, so an [`Error`](crate::Error)
/// written by a newer producer still reads, message intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// No failure. Only meaningful as the sentinel inside a successful
    /// [`ErrorOrNot`](crate::ErrorOrNot).
    #[default]
    #[error("no error")]
    NoError,

    /// An argument was outside the accepted domain.
    #[error("invalid argument")]
    InvalidArgument,

    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,

    /// Input was structurally valid but failed a validation rule.
    #[error("validation failed")]
    ValidationFailed,

    /// Unexpected internal failure.
    #[error("internal error")]
    Internal,

    /// A kind introduced after this build; the original name is not kept.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns the stable numeric code for this kind.
    ///
    /// Known kinds are numbered in declaration order; `Unknown` is `255`.
    /// Codes never change once assigned.
    ///
    /// ```rust
    /// use sumtypes::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::NoError.code(), 0);
    /// assert_eq!(ErrorKind::Internal.code(), 4);
    /// ```
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            ErrorKind::NoError => 0,
            ErrorKind::InvalidArgument => 1,
            ErrorKind::NotFound => 2,
            ErrorKind::ValidationFailed => 3,
            ErrorKind::Internal => 4,
            ErrorKind::Unknown => u8::MAX,
        }
    }

    /// Returns `true` for every kind except the [`NoError`](ErrorKind::NoError) sentinel.
    #[inline]
    pub const fn is_error(self) -> bool {
        !matches!(self, ErrorKind::NoError)
    }
}

/// A numeric code with no matching [`ErrorKind`] in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code {0}")]
pub struct UnknownErrorCode(pub u8);

impl TryFrom<u8> for ErrorKind {
    type Error = UnknownErrorCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ErrorKind::NoError),
            1 => Ok(ErrorKind::InvalidArgument),
            2 => Ok(ErrorKind::NotFound),
            3 => Ok(ErrorKind::ValidationFailed),
            4 => Ok(ErrorKind::Internal),
            u8::MAX => Ok(ErrorKind::Unknown),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

impl<'de> Deserialize<'de> for ErrorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "no_error" => ErrorKind::NoError,
            "invalid_argument" => ErrorKind::InvalidArgument,
            "not_found" => ErrorKind::NotFound,
            "validation_failed" => ErrorKind::ValidationFailed,
            "internal" => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        })
    }
}

impl From<ErrorKind> for u8 {
    fn from(kind: ErrorKind) -> Self {
        kind.code()
    }
}
