//! Recovering from unwrap panics inside functions that return containers.

use std::panic;

use super::common::{assert_not_panics, assert_panics};
use optres::prelude::*;
use optres::{as_crate_error, UnwrapPanic};

/// Looks up a user's age, unwrapping freely along the way.
fn age_of(name: Optional<&str>, table: &[(&str, Outcome<u32>)]) -> Outcome<u32> {
    let mut res = err(Error::Unset);
    catch_unwrap(&mut res, |res| {
        let name = name.expect("no name given");
        let (_, age) = table
            .iter()
            .find(|(key, _)| *key == name)
            .cloned()
            .unwrap_or(("", Outcome::failure("not found")));
        *res = ok(age.unwrap() + 1);
    });
    res
}

fn table() -> Vec<(&'static str, Outcome<u32>)> {
    vec![
        ("ada", Outcome::success(36)),
        ("grace", Outcome::failure("record corrupted")),
    ]
}

#[test]
fn test_successful_body_keeps_its_value() {
    let res = assert_not_panics(|| age_of(some("ada"), &table()));
    assert_eq!(res.unwrap(), 37);
}

#[test]
fn test_optional_unwrap_failure_becomes_failed_unwrap() {
    let res = assert_not_panics(|| age_of(none(), &table()));
    assert!(res.is_err());
    assert_eq!(
        as_crate_error(&res.unwrap_err()),
        Some(&Error::FailedUnwrap)
    );
}

#[test]
fn test_outcome_unwrap_failure_becomes_failed_unwrap() {
    for name in ["grace", "nobody"] {
        let res = age_of(some(name), &table());
        assert_eq!(
            res.unwrap_err().to_string(),
            "Tried to unwrap a failed result!"
        );
    }
}

#[test]
fn test_optional_destination_becomes_none() {
    let first_even = |values: &[i32]| {
        recover(some(0), || {
            let found: Optional<i32> = values.iter().copied().find(|v| v % 2 == 0).into();
            some(found.unwrap())
        })
    };

    assert_eq!(first_even(&[1, 4, 5][..]).unwrap(), 4);
    assert!(first_even(&[1, 3][..]).is_none());
}

#[test]
fn test_nested_catches_recover_innermost_first() {
    let mut outer = ok(0);
    catch_unwrap(&mut outer, |outer| {
        let inner = recover(some(1), || some(none::<i32>().unwrap()));
        assert!(inner.is_none());
        *outer = ok(inner.unwrap_or(7));
    });
    assert_eq!(outer.unwrap(), 7);
}

#[test]
fn test_foreign_panics_escape() {
    let payload = assert_panics(|| {
        let mut res = ok(1);
        catch_unwrap(&mut res, |_| {
            let values: Vec<i32> = Vec::new();
            let _unused = values[3];
        });
    });
    assert!(payload.downcast_ref::<UnwrapPanic>().is_none());
}

#[test]
fn test_missing_destination_lets_unwrap_panic_escape() {
    let payload = panic::catch_unwind(|| {
        let mut slot: Option<Outcome<i32>> = None;
        catch_unwrap(&mut slot, |_| {
            none::<i32>().unwrap();
        });
    })
    .unwrap_err();
    assert!(payload.downcast_ref::<UnwrapPanic>().is_some());
}
