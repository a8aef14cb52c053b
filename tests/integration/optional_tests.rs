//! Optional construction and unwrap.

use sumtypes::Optional;

use crate::common::{find, MaybeIndex};

/// A found element unwraps to its index
#[test]
fn test_found_is_some() {
    let idx = find(&[5, 6, 7], 6);
    assert!(idx.is_some());
    // SAFETY: is_some() checked above.
    assert_eq!(unsafe { idx.unwrap_unchecked() }, 1);
}

/// A missing element is None and only the discriminant is inspected
#[test]
fn test_missing_is_none() {
    let idx = find(&[5, 6, 7], 8);
    assert!(!idx.is_some());
    assert_eq!(idx.get(), None);
}

/// Integer None carries no payload
#[test]
fn test_none_for_integer() {
    let none: Optional<i32> = Optional::none();
    assert!(!none.is_some());
    assert_eq!(none, Optional::None);
}

/// Declared names are interchangeable with the generic type
#[test]
fn test_declared_option_is_generic() {
    let a: MaybeIndex = Optional::some(3);
    let b: Optional<usize> = a;
    assert_eq!(b.into_option(), Some(3));
}
