//! Error types shared by the result facilities.
//!
//! - [`ErrorKind`]: the single, crate-wide enumeration of failure categories
//! - [`Error`]: the `{ code, message }` record stored in a failed result
//!
//! ## Key Invariant
//!
//! These types only describe a failure. Nothing in this crate propagates,
//! wraps, or chains errors: a failed [`Result`](crate::Result) stores exactly
//! one `Error`, and the caller decides what to do with it.

mod kind;
mod record;

pub use kind::{ErrorKind, UnknownErrorCode};
pub use record::Error;
