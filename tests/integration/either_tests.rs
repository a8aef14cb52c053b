//! Either construction and inspection through declared pair types.

use std::any::TypeId;

use sumtypes::Either;

use crate::common::{get_something, IntOrStr, StrOrInt};

/// Left payload survives the trip through a function return
#[test]
fn test_left_payload_from_call_site() {
    let a = get_something(0);
    assert!(a.is_left());
    // SAFETY: is_left() checked above.
    assert_eq!(unsafe { *a.get_left_unchecked() }, "Hello");
}

/// Right payload survives the trip through a function return
#[test]
fn test_right_payload_from_call_site() {
    let a = get_something(1);
    assert!(!a.is_left());
    // SAFETY: is_left() is false, so the value is Right.
    assert_eq!(unsafe { a.into_right_unchecked() }, 0);
}

/// Branching on the discriminant the way calling code does
#[test]
fn test_branch_on_discriminant() {
    let rendered: Vec<String> = [0, 1]
        .into_iter()
        .map(|x| {
            let a = get_something(x);
            if a.is_left() {
                // SAFETY: guarded by is_left().
                unsafe { a.into_left_unchecked() }.to_string()
            } else {
                // SAFETY: guarded by is_left().
                unsafe { a.into_right_unchecked() }.to_string()
            }
        })
        .collect();
    assert_eq!(rendered, vec!["Hello".to_string(), "0".to_string()]);
}

/// Swapped payload pairs are separate types
#[test]
fn test_swapped_pairs_are_distinct() {
    assert_ne!(TypeId::of::<StrOrInt>(), TypeId::of::<IntOrStr>());

    // flip is the only way across
    let a: StrOrInt = Either::new_left("x");
    let b: IntOrStr = a.flip();
    assert!(b.is_right());
    assert_eq!(b.right(), Some(&"x"));
}

/// Values compare equal after construction and access
#[test]
fn test_value_equality_preserved() {
    let original = vec![1u8, 2, 3];
    let e: Either<Vec<u8>, String> = Either::new_left(original.clone());
    assert_eq!(e.clone().into_left(), Some(original));
    assert_eq!(e, Either::Left(vec![1, 2, 3]));
}
