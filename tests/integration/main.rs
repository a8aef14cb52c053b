//! Integration tests for the sumtypes public API.
//!
//! Each module exercises one facility the way calling code uses it:
//! construct at the return point, query the discriminant, then read the
//! matching payload.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With tracing events enabled
//! cargo test --test integration --features tracing -- --nocapture
//! ```

#![allow(unsafe_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;
mod either_tests;
mod error_or_not_tests;
mod optional_tests;
mod result_tests;
