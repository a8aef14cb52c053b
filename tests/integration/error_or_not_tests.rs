//! ErrorOrNot for payload-free operations.

use sumtypes::{Error, ErrorKind, ErrorOrNot};

use crate::common::validate_name;

/// Valid input yields the success constant
#[test]
fn test_valid_name() {
    let outcome = validate_name("alice");
    assert!(!outcome.is_error());
    assert_eq!(outcome, ErrorOrNot::SUCCESS);
}

/// Empty input yields InvalidArgument
#[test]
fn test_empty_name() {
    let outcome = validate_name("");
    assert!(outcome.is_error());
    assert_eq!(
        outcome.error(),
        &Error::new(ErrorKind::InvalidArgument, "name must not be empty")
    );
}

/// Long input yields ValidationFailed with a formatted message
#[test]
fn test_long_name() {
    let outcome = validate_name("a-very-long-user-name");
    assert!(outcome.is_error());
    assert_eq!(outcome.error().code(), ErrorKind::ValidationFailed);
    assert_eq!(outcome.error().message(), "name is 21 bytes, limit is 16");
}

/// Success holds the NoError sentinel
#[test]
fn test_success_sentinel() {
    assert_eq!(ErrorOrNot::SUCCESS.error().code(), ErrorKind::NoError);
}
