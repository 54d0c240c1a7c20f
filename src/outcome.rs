// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! `Outcome<T>`: a success value or an error.
//!
//! Exactly one branch is active. The error side is a shared [`DynError`], so
//! an `Outcome` clones cheaply whatever error it carries.
//!
//! [`OutcomeRef`] is the handle for code that may be given no container. A
//! missing outcome reads as an error: `is_err()` is true, `err()` and
//! `expect_err()` report [`Error::MissingOutcome`] as a value, and only
//! `expect`/`unwrap` panic on the not-null precondition.

use std::fmt;
use std::sync::Arc;

use crate::assert;
use crate::error::{BoxError, DynError, Error};
use crate::optional::Optional;
use crate::panic::{raise, ContainerKind};

pub(crate) const UNWRAP_ERR_MSG: &str = "Tried unwrapping a Result that had an error value!";
pub(crate) const UNWRAP_OK_MSG: &str = "Expect_err was called with an Ok value";

/// Container for either a value of `T` or an error.
#[derive(Clone)]
pub struct Outcome<T> {
    pub(crate) inner: Result<T, DynError>,
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome { inner: Ok(value) }
    }

    pub fn failure<E: Into<BoxError>>(err: E) -> Self {
        Outcome {
            inner: Err(Arc::from(err.into())),
        }
    }

    /// Failure carrying an already shared error.
    pub fn failure_shared(err: DynError) -> Self {
        Outcome { inner: Err(err) }
    }

    /// Failure with its type taken from a sample value.
    pub fn failure_like<E: Into<BoxError>>(err: E, _sample: &T) -> Self {
        Self::failure(err)
    }

    /// `Ok(value)` when `err` is `None`, otherwise `Err(err)`.
    pub fn wrap<E: Into<BoxError>>(value: T, err: Option<E>) -> Self {
        match err {
            None => Self::success(value),
            Some(err) => Self::failure(err),
        }
    }

    pub fn from_result(result: Result<T, DynError>) -> Self {
        Outcome { inner: result }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// Alias of [`is_ok`](Self::is_ok).
    #[inline]
    pub fn has_value(&self) -> bool {
        self.is_ok()
    }

    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.inner {
            Ok(value) => value,
            Err(_) => raise(ContainerKind::Outcome, msg),
        }
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(_) => raise(ContainerKind::Outcome, UNWRAP_ERR_MSG),
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
        match self.inner {
            Ok(value) => value,
            Err(_) => f(),
        }
    }

    /// Return the error, panicking with `msg` when the outcome is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> DynError {
        match self.inner {
            Err(err) => err,
            Ok(_) => raise(ContainerKind::Outcome, msg),
        }
    }

    #[track_caller]
    pub fn unwrap_err(self) -> DynError {
        match self.inner {
            Err(err) => err,
            Ok(_) => raise(ContainerKind::Outcome, UNWRAP_OK_MSG),
        }
    }

    /// `Ok(v)` becomes `Some(v)`, an error becomes `None`.
    pub fn ok(self) -> Optional<T> {
        self.inner.ok().into()
    }

    /// An error becomes `Some(err)`, `Ok` becomes `None`.
    pub fn err(self) -> Optional<DynError> {
        self.inner.err().into()
    }

    pub fn value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    pub fn error(&self) -> Option<&DynError> {
        self.inner.as_ref().err()
    }

    pub fn as_result(&self) -> Result<&T, &DynError> {
        self.inner.as_ref()
    }

    pub fn into_result(self) -> Result<T, DynError> {
        self.inner
    }

    /// Borrow as a handle that is known to be present.
    pub fn by_ref(&self) -> OutcomeRef<'_, T> {
        OutcomeRef::new(self)
    }

    /// Force the error state. Used by unwrap recovery and by failed scans.
    pub(crate) fn reset_to_err(&mut self, err: Error) {
        self.inner = Err(err.shared());
    }
}

impl<T> Default for Outcome<T> {
    /// An outcome that was never assigned: `Err(Error::Unset)`.
    fn default() -> Self {
        Outcome {
            inner: Err(Error::Unset.shared()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Err(err) => f.debug_tuple("Err").field(&err.to_string()).finish(),
        }
    }
}

/// Errors are equal when they share an allocation or render the same message.
impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Ok(a), Ok(b)) => a == b,
            (Err(a), Err(b)) => same_error(a, b),
            _ => false,
        }
    }
}

pub(crate) fn same_error(a: &DynError, b: &DynError) -> bool {
    Arc::ptr_eq(a, b) || a.to_string() == b.to_string()
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(err),
        }
    }
}

/// A borrowed `Outcome` that may itself be missing.
#[derive(Debug)]
pub struct OutcomeRef<'a, T> {
    target: Option<&'a Outcome<T>>,
}

impl<T> Clone for OutcomeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OutcomeRef<'_, T> {}

impl<'a, T> OutcomeRef<'a, T> {
    pub fn new(target: &'a Outcome<T>) -> Self {
        OutcomeRef {
            target: Some(target),
        }
    }

    pub fn missing() -> Self {
        OutcomeRef { target: None }
    }

    pub fn is_missing(&self) -> bool {
        self.target.is_none()
    }

    pub fn get(&self) -> Option<&'a Outcome<T>> {
        self.target
    }

    pub fn is_ok(&self) -> bool {
        match self.target {
            Some(res) => res.is_ok(),
            None => false,
        }
    }

    pub fn is_err(&self) -> bool {
        match self.target {
            Some(res) => res.is_err(),
            None => true,
        }
    }

    pub fn has_value(&self) -> bool {
        match self.target {
            Some(res) => res.has_value(),
            None => false,
        }
    }

    /// The error, or a synthesized one when the outcome is missing.
    /// Panics with `msg` only when the outcome is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> DynError {
        match self.target {
            Some(res) => match &res.inner {
                Err(err) => Arc::clone(err),
                Ok(_) => raise(ContainerKind::Outcome, msg),
            },
            None => Error::MissingOutcome { op: "ExpectErr" }.shared(),
        }
    }

    #[track_caller]
    pub fn unwrap_err(self) -> DynError {
        match self.target {
            Some(res) => match &res.inner {
                Err(err) => Arc::clone(err),
                Ok(_) => raise(ContainerKind::Outcome, UNWRAP_OK_MSG),
            },
            None => Error::MissingOutcome { op: "UnwrapErr" }.shared(),
        }
    }

    /// A missing outcome reports its misuse as `Some(error)` rather than `None`.
    pub fn err(self) -> Optional<DynError> {
        match self.target {
            Some(res) => res.error().cloned().into(),
            None => Optional::some(Error::MissingOutcome { op: "Err" }.shared()),
        }
    }
}

impl<'a, T: Clone> OutcomeRef<'a, T> {
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        let res = assert::not_null(self.target, "Outcome");
        res.clone().expect(msg)
    }

    #[track_caller]
    pub fn unwrap(self) -> T {
        let res = assert::not_null(self.target, "Outcome");
        res.clone().unwrap()
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.target.and_then(Outcome::value) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.target
            .and_then(Outcome::value)
            .cloned()
            .unwrap_or_default()
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self.target.and_then(Outcome::value) {
            Some(value) => value.clone(),
            None => f(),
        }
    }

    pub fn ok(self) -> Optional<T> {
        self.target.and_then(Outcome::value).cloned().into()
    }
}

impl<'a, T> From<&'a Outcome<T>> for OutcomeRef<'a, T> {
    fn from(target: &'a Outcome<T>) -> Self {
        OutcomeRef::new(target)
    }
}

impl<'a, T> From<Option<&'a Outcome<T>>> for OutcomeRef<'a, T> {
    fn from(target: Option<&'a Outcome<T>>) -> Self {
        OutcomeRef { target }
    }
}
