//! Result construction, error inspection, and unwrap.

use sumtypes::{Error, ErrorKind, Result};

use crate::common::{divide, greet};

/// Failed division reports InvalidArgument with the exact message
#[test]
fn test_division_by_zero_is_err() {
    let res = divide(1, 0);
    assert!(res.is_err());

    // SAFETY: is_err() checked above.
    let err = unsafe { res.get_error_unchecked() };
    assert_eq!(err.code(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "x must not be 0");
}

/// Successful division unwraps to the quotient
#[test]
fn test_division_ok() {
    let res = divide(9, 3);
    assert!(!res.is_err());
    // SAFETY: is_err() is false.
    assert_eq!(unsafe { res.unwrap_unchecked() }, 3);
}

/// Ok("Hello!") unwraps to exactly "Hello!"
#[test]
fn test_greeting_unwraps() {
    let res = greet();
    assert!(!res.is_err());
    // SAFETY: is_err() is false.
    assert_eq!(unsafe { res.unwrap_unchecked() }, "Hello!");
}

/// Success is always Left and failure always Right
#[test]
fn test_left_right_convention() {
    assert!(divide(4, 2).is_left());
    assert!(divide(4, 0).is_right());
}

/// Checked accessors never touch the inactive variant
#[test]
fn test_checked_path() {
    assert_eq!(divide(8, 4).value(), Some(&2));
    assert!(divide(8, 0).value().is_none());
    assert_eq!(
        divide(8, 0).error().map(Error::code),
        Some(ErrorKind::InvalidArgument)
    );
}

/// Callers opt into `?` by converting explicitly
#[test]
fn test_explicit_std_conversion() {
    fn sum_of_quotients() -> std::result::Result<i32, Error> {
        let a = divide(10, 2).into_std()?;
        let b = divide(10, 0).into_std()?;
        Ok(a + b)
    }

    let err = sum_of_quotients().unwrap_err();
    assert_eq!(err.code(), ErrorKind::InvalidArgument);
}

/// Owned messages are accepted alongside string literals
#[test]
fn test_owned_message() {
    let limit = 3;
    let res: Result<()> = Result::err(ErrorKind::NotFound, format!("no entry above {limit}"));
    assert_eq!(res.error().map(Error::message), Some("no entry above 3"));
}
