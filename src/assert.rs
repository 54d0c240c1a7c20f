// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Precondition helpers.
//!
//! These panic with a diagnostic naming the caller's location. They guard
//! programmer errors only: a failed assertion is never meant to be caught,
//! and [`crate::catch_unwrap`] deliberately lets these panics through.

use std::fmt::Debug;
use std::panic::Location;

/// Panic unless `value` is present.
///
/// `what` names the missing thing in the diagnostic.
#[inline]
#[track_caller]
pub fn assert_not_null<T: ?Sized>(value: Option<&T>, what: &str) {
    if value.is_none() {
        null_violation::<T>(what);
    }
}

/// Return the referenced value, panicking like [`assert_not_null`] when it is missing.
#[inline]
#[track_caller]
pub fn not_null<'a, T: ?Sized>(value: Option<&'a T>, what: &str) -> &'a T {
    match value {
        Some(v) => v,
        None => null_violation::<T>(what),
    }
}

#[cold]
#[track_caller]
fn null_violation<T: ?Sized>(what: &str) -> ! {
    let caller = Location::caller();
    panic!(
        "Value should not be null! {}:{} => [{}]({})",
        caller.file(),
        caller.line(),
        std::any::type_name::<T>(),
        what
    );
}

/// Panic if `value` is present.
#[inline]
#[track_caller]
pub fn assert_null<T: Debug + ?Sized>(value: Option<&T>, what: &str) {
    if let Some(v) = value {
        let caller = Location::caller();
        panic!(
            "Value should be null! {}:{} => [{}]({}) = {:?}",
            caller.file(),
            caller.line(),
            std::any::type_name::<T>(),
            what,
            v
        );
    }
}

/// Panic unless `condition` holds.
#[inline]
#[track_caller]
pub fn assert_true(condition: bool, what: &str) {
    if !condition {
        let caller = Location::caller();
        panic!(
            "Condition should hold! {}:{} => {}",
            caller.file(),
            caller.line(),
            what
        );
    }
}

/// Panic if `condition` holds.
#[inline]
#[track_caller]
pub fn assert_false(condition: bool, what: &str) {
    if condition {
        let caller = Location::caller();
        panic!(
            "Condition should not hold! {}:{} => {}",
            caller.file(),
            caller.line(),
            what
        );
    }
}

/// Panic unless `left == right`. Both values appear in the diagnostic.
#[inline]
#[track_caller]
pub fn assert_equal<T: PartialEq + Debug + ?Sized>(left: &T, right: &T, what: &str) {
    if left != right {
        comparison_violation("Values should be equal!", "!=", left, right, what);
    }
}

/// Panic if `left == right`.
#[inline]
#[track_caller]
pub fn assert_not_equal<T: PartialEq + Debug + ?Sized>(left: &T, right: &T, what: &str) {
    if left == right {
        comparison_violation("Values should differ!", "==", left, right, what);
    }
}

#[cold]
#[track_caller]
fn comparison_violation<T: Debug + ?Sized>(
    headline: &str,
    op: &str,
    left: &T,
    right: &T,
    what: &str,
) -> ! {
    let caller = Location::caller();
    panic!(
        "{} {}:{} => [{}]({}) {:?} {} {:?}",
        headline,
        caller.file(),
        caller.line(),
        std::any::type_name::<T>(),
        what,
        left,
        op,
        right
    );
}
