// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Capabilities shared by both containers and their handles.
//!
//! [`ValueContainer`] answers "does this hold a usable value" (`false` for
//! `None`, for an error, and for a missing handle). [`Unwrappable`] is the
//! extract-or-fail family. The free functions at the bottom let generic code
//! work over any of the four implementors.

use crate::error::BoxError;
use crate::optional::{Optional, OptionalRef};
use crate::outcome::{Outcome, OutcomeRef};

pub trait ValueContainer {
    fn has_value(&self) -> bool;
}

pub trait Unwrappable<T>: Sized {
    /// Panics with the provided message when there is no value.
    fn expect(self, msg: &str) -> T;
    /// Panics with a generic message when there is no value.
    fn unwrap(self) -> T;
    fn unwrap_or(self, default: T) -> T;
    fn unwrap_or_default(self) -> T
    where
        T: Default;
    fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T;
}

impl<T> ValueContainer for Optional<T> {
    fn has_value(&self) -> bool {
        Optional::has_value(self)
    }
}

impl<T> ValueContainer for Outcome<T> {
    fn has_value(&self) -> bool {
        Outcome::has_value(self)
    }
}

impl<T> ValueContainer for OptionalRef<'_, T> {
    fn has_value(&self) -> bool {
        OptionalRef::has_value(self)
    }
}

impl<T> ValueContainer for OutcomeRef<'_, T> {
    fn has_value(&self) -> bool {
        OutcomeRef::has_value(self)
    }
}

impl<C: ValueContainer + ?Sized> ValueContainer for &C {
    fn has_value(&self) -> bool {
        (**self).has_value()
    }
}

macro_rules! forward_unwrappable {
    ($ty:ty, [$($bound:tt)*], $target:ident) => {
        impl<$($bound)*> Unwrappable<T> for $ty {
            #[track_caller]
            fn expect(self, msg: &str) -> T {
                $target::expect(self, msg)
            }

            #[track_caller]
            fn unwrap(self) -> T {
                $target::unwrap(self)
            }

            fn unwrap_or(self, default: T) -> T {
                $target::unwrap_or(self, default)
            }

            fn unwrap_or_default(self) -> T
            where
                T: Default,
            {
                $target::unwrap_or_default(self)
            }

            fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
                $target::unwrap_or_else(self, f)
            }
        }
    };
}

forward_unwrappable!(Optional<T>, [T], Optional);
forward_unwrappable!(Outcome<T>, [T], Outcome);
forward_unwrappable!(OptionalRef<'_, T>, [T: Clone], OptionalRef);
forward_unwrappable!(OutcomeRef<'_, T>, [T: Clone], OutcomeRef);

pub fn some<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

pub fn none<T>() -> Optional<T> {
    Optional::none()
}

pub fn ok<T>(value: T) -> Outcome<T> {
    Outcome::success(value)
}

pub fn err<T, E: Into<BoxError>>(err: E) -> Outcome<T> {
    Outcome::failure(err)
}

#[track_caller]
pub fn expect<T, U: Unwrappable<T>>(val: U, msg: &str) -> T {
    val.expect(msg)
}

#[track_caller]
pub fn unwrap<T, U: Unwrappable<T>>(val: U) -> T {
    val.unwrap()
}

pub fn unwrap_or<T, U: Unwrappable<T>>(val: U, default: T) -> T {
    val.unwrap_or(default)
}

pub fn unwrap_or_default<T: Default, U: Unwrappable<T>>(val: U) -> T {
    val.unwrap_or_default()
}

pub fn unwrap_or_else<T, U, F>(val: U, f: F) -> T
where
    U: Unwrappable<T>,
    F: FnOnce() -> T,
{
    val.unwrap_or_else(f)
}

/// `true` unless the container is `None`, an error, or missing.
pub fn has_value<C: ValueContainer + ?Sized>(val: &C) -> bool {
    val.has_value()
}
