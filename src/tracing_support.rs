//! Tracing integration for error results.
//!
//! Enabled with the `tracing` feature. Nothing here changes a value; the
//! hooks only emit events so failures show up in structured logs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tracing_subscriber::prelude::*;
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .init();
//!
//! let res = parse_port(input).traced("parse_port");
//! // Logs: WARN operation failed operation="parse_port" error.code=invalid argument error.message="port out of range"
//! ```

use crate::error::Error;

/// Emitted whenever a failed result or `ErrorOrNot` is constructed.
pub(crate) fn error_constructed(error: &Error, origin: &'static str) {
    tracing::trace!(
        origin,
        error.code = %error.code(),
        error.message = error.message(),
        "error value constructed"
    );
}

/// Emitted by `traced()` for results that hold an error.
pub(crate) fn error_observed(error: &Error, operation: &str) {
    tracing::warn!(
        operation,
        error.code = %error.code(),
        error.message = error.message(),
        "operation failed"
    );
}
