//! Shared call sites used by the integration tests.

use sumtypes::{declare_either, declare_option, declare_result, Either, ErrorKind, ErrorOrNot};

declare_either!(pub StrOrInt = &'static str, i32);
declare_either!(pub IntOrStr = i32, &'static str);
declare_result!(pub Quotient = i32);
declare_result!(pub Greeting = &'static str);
declare_option!(pub MaybeIndex = usize);

/// Returns `Left("Hello")` for zero and `Right(0)` otherwise.
pub fn get_something(x: i32) -> StrOrInt {
    if x == 0 {
        Either::new_left("Hello")
    } else {
        Either::new_right(0)
    }
}

/// Integer division that refuses a zero divisor.
pub fn divide(a: i32, x: i32) -> Quotient {
    if x == 0 {
        return Quotient::err(ErrorKind::InvalidArgument, "x must not be 0");
    }
    Quotient::ok(a / x)
}

/// Always succeeds with a fixed greeting.
pub fn greet() -> Greeting {
    Greeting::ok("Hello!")
}

/// Position of `needle` in `haystack`, if present.
pub fn find(haystack: &[i32], needle: i32) -> MaybeIndex {
    haystack.iter().position(|&v| v == needle).into()
}

/// Rejects empty or overly long names.
pub fn validate_name(name: &str) -> ErrorOrNot {
    if name.is_empty() {
        return ErrorOrNot::failure(ErrorKind::InvalidArgument, "name must not be empty");
    }
    if name.len() > 16 {
        return ErrorOrNot::failure(
            ErrorKind::ValidationFailed,
            format!("name is {} bytes, limit is 16", name.len()),
        );
    }
    ErrorOrNot::SUCCESS
}
