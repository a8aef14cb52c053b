//! # sumtypes
//!
//! Lightweight tagged-union values with an explicit unchecked access path.
//!
//! ## Quick Start
//!
//! ```rust
//! use sumtypes::prelude::*;
//!
//! fn divide(a: i32, x: i32) -> Result<i32> {
//!     if x == 0 {
//!         return Result::err(ErrorKind::InvalidArgument, "x must not be 0");
//!     }
//!     Result::ok(a / x)
//! }
//!
//! let res = divide(10, 2);
//! if !res.is_err() {
//!     // SAFETY: is_err() was checked.
//!     let value = unsafe { res.unwrap_unchecked() };
//!     assert_eq!(value, 5);
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Either**: [`Either<L, R>`] holds a `Left(L)` or a `Right(R)`
//! - **Result**: [`Result<T>`] is `Either<T, Error>`; `Left` is always success
//! - **Optional**: [`Optional<T>`] holds `Some(T)` or `None`
//! - **ErrorOrNot**: [`ErrorOrNot`] reports failure for operations with no payload
//! - **Unchecked accessors**: every `*_unchecked` method is an `unsafe fn`;
//!   calling it on the wrong variant is undefined behavior. Debug builds
//!   assert, release builds do not. Checked accessors returning `Option`
//!   exist alongside them.
//! - **No propagation**: these are plain values. Nothing short-circuits,
//!   wraps, or chains errors.
//!
//! ## Features
//!
//! - `tracing`: emit trace events when error values are constructed and
//!   enable `Result::traced`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod either;
pub mod error;
pub mod error_or_not;
pub mod optional;
pub mod result;

mod declare;

// Tracing support
#[cfg(feature = "tracing")]
mod tracing_support;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use either::Either;
pub use error::{Error, ErrorKind, UnknownErrorCode};
pub use error_or_not::ErrorOrNot;
pub use optional::Optional;
pub use result::Result;
