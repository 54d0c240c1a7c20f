//! Outcome<T> and the OutcomeRef handle, including missing containers.

use std::sync::Arc;

use super::common::{assert_not_panics, assert_panic_message, assert_panic_prefix, assert_panics};
use optres::{as_crate_error, DynError, Error, Optional, Outcome, OutcomeRef};

fn some_error() -> DynError {
    Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "some error"))
}

fn r() -> Outcome<&'static str> {
    Outcome::success("something")
}

fn err_result() -> Outcome<i32> {
    Outcome::failure_like("some error", &5)
}

fn missing() -> OutcomeRef<'static, i32> {
    OutcomeRef::missing()
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

#[test]
fn test_constructors() {
    let err = some_error();
    let w = Outcome::<i32>::failure_shared(Arc::clone(&err));

    assert_eq!(r().value(), Some(&"something"));
    assert_eq!(Outcome::success(5).value(), Some(&5));
    assert!(Arc::ptr_eq(w.error().unwrap(), &err));
    assert_eq!(err_result().error().unwrap().to_string(), "some error");
}

#[test]
fn test_wrap_pairs_value_and_error() {
    let ok = Outcome::wrap(3, None::<Error>);
    assert_eq!(ok.unwrap(), 3);

    let failed = Outcome::wrap(3, Some(Error::Null));
    assert!(failed.is_err());
}

#[test]
fn test_default_is_unset() {
    let res = Outcome::<u8>::default();
    assert_eq!(as_crate_error(&res.unwrap_err()), Some(&Error::Unset));
}

// ============================================================================
// QUERIES
// ============================================================================

#[test]
fn test_queries() {
    assert!(r().is_ok());
    assert!(Outcome::success(5).is_ok());
    assert!(!r().is_err());
    assert!(err_result().is_err());
    assert!(!err_result().is_ok());
    assert!(r().has_value());
    assert!(!err_result().has_value());
}

#[test]
fn test_missing_reads_as_error() {
    assert!(missing().is_err());
    assert!(!missing().is_ok());
    assert!(!missing().has_value());
}

// ============================================================================
// EXTRACTION
// ============================================================================

#[test]
fn test_expect() {
    assert_not_panics(|| r().expect("test"));
    assert_panic_message("test", || err_result().expect("test"));
    assert_panic_prefix("Value should not be null!", || missing().expect("test"));
    assert_eq!(r().unwrap(), "something");
}

#[test]
fn test_unwrap() {
    assert_not_panics(|| r().unwrap());
    assert_panic_message(
        "Tried unwrapping a Result that had an error value!",
        || err_result().unwrap(),
    );
    assert_panics(|| missing().unwrap());
}

#[test]
fn test_unwrap_or_family() {
    assert_eq!(r().unwrap_or("test"), "something");
    assert_eq!(err_result().unwrap_or(1), 1);
    assert_eq!(missing().unwrap_or(1), 1);

    assert_eq!(r().unwrap_or_default(), "something");
    assert_eq!(err_result().unwrap_or_default(), 0);
    assert_eq!(missing().unwrap_or_default(), 0);

    assert_eq!(r().unwrap_or_else(|| "this is a string"), "something");
    assert_eq!(err_result().unwrap_or_else(|| 10), 10);
    assert_eq!(missing().unwrap_or_else(|| 10), 10);
}

#[test]
fn test_expect_err() {
    assert_panic_message("test", || r().expect_err("test"));
    let err = assert_not_panics(|| err_result().expect_err("test"));
    assert_eq!(err.to_string(), "some error");

    let synthesized = assert_not_panics(|| missing().expect_err("test"));
    assert_eq!(
        as_crate_error(&synthesized),
        Some(&Error::MissingOutcome { op: "ExpectErr" })
    );
}

#[test]
fn test_unwrap_err() {
    assert_panic_message("Expect_err was called with an Ok value", || r().unwrap_err());
    let stored = err_result();
    let err = stored.clone().unwrap_err();
    assert!(Arc::ptr_eq(&err, stored.error().unwrap()));

    let synthesized = assert_not_panics(|| missing().unwrap_err());
    assert_eq!(
        synthesized.to_string(),
        "UnwrapErr was called on a missing Result"
    );
}

// ============================================================================
// CONVERSION TO OPTIONAL
// ============================================================================

#[test]
fn test_ok() {
    assert_eq!(r().ok(), Optional::some("something"));
    assert_eq!(err_result().ok(), Optional::none());
    assert_eq!(missing().ok(), Optional::none());
}

#[test]
fn test_err() {
    assert!(r().err().is_none());
    assert!(err_result().err().is_some());

    // A missing outcome still reports an error.
    let from_missing = missing().err();
    assert!(from_missing.is_some());
    assert_eq!(
        as_crate_error(&from_missing.unwrap()),
        Some(&Error::MissingOutcome { op: "Err" })
    );
}

#[test]
fn test_result_interop() {
    let parsed: Outcome<u16> = "80".parse::<u16>().into();
    assert_eq!(parsed.into_result().ok(), Some(80));

    let failed: Outcome<u16> = "eighty".parse::<u16>().into();
    assert!(failed.as_result().is_err());
}

#[test]
fn test_equality_compares_errors_by_message() {
    assert_eq!(Outcome::<i32>::failure("boom"), Outcome::<i32>::failure("boom"));
    assert_ne!(Outcome::<i32>::failure("boom"), Outcome::<i32>::failure("bang"));
    assert_ne!(Outcome::success(1), Outcome::<i32>::failure("1"));
}
