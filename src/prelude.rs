//! Prelude module for convenient imports.
//!
//! ```rust
//! use sumtypes::prelude::*;
//! ```
//!
//! This brings the four sum types, the shared error types, and the
//! declaration macros into scope. Note that it shadows the standard
//! library's `Result` with [`Result<T>`](crate::Result).

pub use crate::{
    declare_either, declare_option, declare_result,
    either::Either,
    error::{Error, ErrorKind},
    error_or_not::ErrorOrNot,
    optional::Optional,
    result::Result,
};
