//! Named declarations for concrete sum types.
//!
//! The generic types work on their own. These macros give a concrete
//! instantiation a name, which keeps signatures short when the same pair
//! is used across many functions.
//!
//! ```rust
//! use sumtypes::{declare_either, declare_option, declare_result, Either, ErrorKind};
//!
//! declare_either!(pub StrOrInt = &'static str, i32);
//! declare_result!(pub ParsedPort = u16);
//! declare_option!(pub MaybeId = u64);
//!
//! fn get_something(x: i32) -> StrOrInt {
//!     if x == 0 { Either::new_left("Hello") } else { Either::new_right(0) }
//! }
//!
//! fn parse_port(raw: &str) -> ParsedPort {
//!     match raw.parse() {
//!         Ok(port) => ParsedPort::ok(port),
//!         Err(_) => ParsedPort::err(ErrorKind::InvalidArgument, "not a port"),
//!     }
//! }
//!
//! assert!(get_something(0).is_left());
//! assert!(parse_port("http").is_err());
//! assert!(MaybeId::none().is_none());
//! ```
//!
//! Declaring the same name twice in one scope is a compile-time error:
//!
//! ```compile_fail
//! use sumtypes::declare_either;
//!
//! declare_either!(StrOrInt = String, i32);
//! declare_either!(StrOrInt = String, i32);
//! ```
//!
//! Declarations over swapped pairs are different types:
//!
//! ```compile_fail
//! use sumtypes::{declare_either, Either};
//!
//! declare_either!(StrOrInt = String, i32);
//! declare_either!(IntOrStr = i32, String);
//!
//! let a: StrOrInt = Either::new_right(1);
//! let b: IntOrStr = a;
//! ```

/// Declares a named [`Either`](crate::Either) over a concrete `(left, right)` pair.
///
/// `declare_either!(pub Name = L, R)` expands to
/// `pub type Name = Either<L, R>;`.
#[macro_export]
macro_rules! declare_either {
    ($(#[$meta:meta])* $vis:vis $name:ident = $left:ty, $right:ty $(;)?) => {
        $(#[$meta])*
        $vis type $name = $crate::Either<$left, $right>;
    };
}

/// Declares a named [`Result`](crate::Result) for a concrete success type.
///
/// `declare_result!(pub Name = T)` expands to
/// `pub type Name = Either<T, Error>;`.
#[macro_export]
macro_rules! declare_result {
    ($(#[$meta:meta])* $vis:vis $name:ident = $value:ty $(;)?) => {
        $(#[$meta])*
        $vis type $name = $crate::Either<$value, $crate::Error>;
    };
}

/// Declares a named [`Optional`](crate::Optional) for a concrete payload type.
///
/// `declare_option!(pub Name = T)` expands to
/// `pub type Name = Optional<T>;`.
#[macro_export]
macro_rules! declare_option {
    ($(#[$meta:meta])* $vis:vis $name:ident = $value:ty $(;)?) => {
        $(#[$meta])*
        $vis type $name = $crate::Optional<$value>;
    };
}
