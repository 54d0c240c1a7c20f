//! Panic assertions shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::panic::payload_message;

/// Run `f`, returning the panic payload. Fails the test if `f` returns.
#[track_caller]
pub fn assert_panics<R>(f: impl FnOnce() -> R) -> Box<dyn Any + Send> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a panic, but the call returned normally"),
        Err(payload) => payload,
    }
}

/// Run `f` and return its value. Fails the test with the panic message if it
/// panics.
#[track_caller]
pub fn assert_not_panics<R>(f: impl FnOnce() -> R) -> R {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => panic!(
            "expected no panic, got: {}",
            payload_message(payload.as_ref()).unwrap_or_else(|| "<non-string payload>".into())
        ),
    }
}

/// Assert that `f` panics with exactly `expected` as its message.
#[track_caller]
pub fn assert_panic_message<R>(expected: &str, f: impl FnOnce() -> R) {
    let payload = assert_panics(f);
    let message = payload_message(payload.as_ref());
    assert_eq!(message.as_deref(), Some(expected), "unexpected panic message");
}

/// Assert that `f` panics with a message starting with `prefix`.
#[track_caller]
pub fn assert_panic_prefix<R>(prefix: &str, f: impl FnOnce() -> R) {
    let payload = assert_panics(f);
    let message = payload_message(payload.as_ref()).unwrap_or_default();
    assert!(
        message.starts_with(prefix),
        "panic message {message:?} does not start with {prefix:?}"
    );
}
