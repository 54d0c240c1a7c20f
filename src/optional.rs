// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! `Optional<T>`: a value that may or may not be present.
//!
//! The state is held as `Option<T>`, so an absent value can never be read by
//! accident. [`OptionalRef`] is the handle for code that may be given no
//! container at all: its queries treat a missing container as `None`, while
//! `expect`/`unwrap` fail the not-null precondition.
//!
//! # Panics
//!
//! `expect` and `unwrap` on an empty container raise an
//! [`UnwrapPanic`](crate::UnwrapPanic), which [`crate::catch_unwrap`] can
//! turn back into an empty return value.

use crate::assert;
use crate::error::BoxError;
use crate::outcome::Outcome;
use crate::panic::{raise, ContainerKind};

pub(crate) const UNWRAP_NONE_MSG: &str = "Tried unwrapping an Optional that did not have a value!";

/// Container for a value of `T` that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Optional<T> {
    pub(crate) inner: Option<T>,
}

impl<T> Optional<T> {
    pub fn some(value: T) -> Self {
        Optional { inner: Some(value) }
    }

    pub fn none() -> Self {
        Optional { inner: None }
    }

    /// `None` with its type taken from a sample value, for call sites where
    /// spelling out `T` is awkward.
    pub fn none_like(_sample: &T) -> Self {
        Self::none()
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Alias of [`is_some`](Self::is_some).
    #[inline]
    pub fn has_value(&self) -> bool {
        self.is_some()
    }

    /// Return the value or panic with `msg`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.inner {
            Some(value) => value,
            None => raise(ContainerKind::Optional, msg),
        }
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.inner {
            Some(value) => value,
            None => raise(ContainerKind::Optional, UNWRAP_NONE_MSG),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.inner.unwrap_or_else(f)
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(err)`.
    pub fn ok_or<E: Into<BoxError>>(self, err: E) -> Outcome<T> {
        match self.inner {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(err),
        }
    }

    /// Like [`ok_or`](Self::ok_or) with the error computed only when needed.
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T>
    where
        E: Into<BoxError>,
        F: FnOnce() -> E,
    {
        match self.inner {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(f()),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            inner: self.inner.as_ref(),
        }
    }

    /// Borrow as a handle that is known to be present.
    pub fn by_ref(&self) -> OptionalRef<'_, T> {
        OptionalRef::new(self)
    }

    /// Force the empty state. Used by unwrap recovery and by scanning a null.
    pub(crate) fn reset_to_none(&mut self) {
        self.inner = None;
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(inner: Option<T>) -> Self {
        Optional { inner }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.inner
    }
}

/// A borrowed `Optional` that may itself be missing.
///
/// Queries and the `unwrap_or*` family treat a missing container as `None`.
/// `expect` and `unwrap` require the container to exist and panic through
/// [`assert::not_null`] otherwise. That panic is a plain precondition
/// failure, not an [`UnwrapPanic`](crate::UnwrapPanic).
#[derive(Debug)]
pub struct OptionalRef<'a, T> {
    target: Option<&'a Optional<T>>,
}

impl<T> Clone for OptionalRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OptionalRef<'_, T> {}

impl<'a, T> OptionalRef<'a, T> {
    pub fn new(target: &'a Optional<T>) -> Self {
        OptionalRef {
            target: Some(target),
        }
    }

    pub fn missing() -> Self {
        OptionalRef { target: None }
    }

    pub fn is_missing(&self) -> bool {
        self.target.is_none()
    }

    pub fn get(&self) -> Option<&'a Optional<T>> {
        self.target
    }

    pub fn is_some(&self) -> bool {
        match self.target {
            Some(opt) => opt.is_some(),
            None => false,
        }
    }

    pub fn is_none(&self) -> bool {
        match self.target {
            Some(opt) => opt.is_none(),
            None => true,
        }
    }

    pub fn has_value(&self) -> bool {
        match self.target {
            Some(opt) => opt.has_value(),
            None => false,
        }
    }
}

impl<'a, T: Clone> OptionalRef<'a, T> {
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        let opt = assert::not_null(self.target, "Optional");
        opt.clone().expect(msg)
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        let opt = assert::not_null(self.target, "Optional");
        opt.clone().unwrap()
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.target.and_then(Optional::as_option) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.target
            .and_then(Optional::as_option)
            .cloned()
            .unwrap_or_default()
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self.target.and_then(Optional::as_option) {
            Some(value) => value.clone(),
            None => f(),
        }
    }

    pub fn ok_or<E: Into<BoxError>>(self, err: E) -> Outcome<T> {
        match self.target.and_then(Optional::as_option) {
            Some(value) => Outcome::success(value.clone()),
            None => Outcome::failure(err),
        }
    }

    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T>
    where
        E: Into<BoxError>,
        F: FnOnce() -> E,
    {
        match self.target.and_then(Optional::as_option) {
            Some(value) => Outcome::success(value.clone()),
            None => Outcome::failure(f()),
        }
    }
}

impl<'a, T> From<&'a Optional<T>> for OptionalRef<'a, T> {
    fn from(target: &'a Optional<T>) -> Self {
        OptionalRef::new(target)
    }
}

impl<'a, T> From<Option<&'a Optional<T>>> for OptionalRef<'a, T> {
    fn from(target: Option<&'a Optional<T>>) -> Self {
        OptionalRef { target }
    }
}
