// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Error values produced by the containers and their adapters.
//!
//! Two kinds of failure live here. Conversion failures (scan, JSON, store
//! values) are ordinary `Err` returns the caller can always handle. Sentinels
//! (`Unset`, `Null`, `MissingOutcome`, `FailedUnwrap`) stand in for an error
//! when an operation promised not to panic but had nothing real to report.
//!
//! Precondition violations are not errors: unwrapping an empty container
//! panics (see [`crate::panic`]).

use std::sync::Arc;
use thiserror::Error;

/// Shared, type-erased error stored in the `Err` branch of an [`crate::Outcome`].
///
/// `Arc` keeps `Outcome<T>` cheap to clone without requiring the error to be `Clone`.
pub type DynError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Boxed error accepted by the `Err` constructors. Anything convertible into
/// this (concrete errors, `&str`, `String`) can seed an `Outcome`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An `Outcome` that was declared but never assigned.
    #[error("result was never set")]
    Unset,

    /// The source (database column or JSON document) held a null.
    #[error("value was null")]
    Null,

    /// An operation was invoked through a missing `Outcome` handle.
    #[error("{op} was called on a missing Result")]
    MissingOutcome { op: &'static str },

    /// Written into an `Outcome` by [`crate::catch_unwrap`] after a library unwrap panicked.
    #[error("Tried to unwrap a failed result!")]
    FailedUnwrap,

    /// No scan rule converts the source into the destination type.
    #[error("unsupported type {found} or differs from {expected}, and the type doesn't implement FromSqlValue")]
    TypeMismatch {
        found: &'static str,
        expected: &'static str,
    },

    /// A byte or text column could not be parsed as an RFC 3339 timestamp.
    #[error("invalid RFC 3339 timestamp: {0}")]
    Timestamp(String),

    /// A byte column was not valid UTF-8.
    #[error("invalid UTF-8 in byte column: {0}")]
    Utf8(String),

    /// A number did not fit the destination type.
    #[error("number {value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// The contained value has no storable representation.
    #[error("unsupported type for storable value: {0}")]
    Unsupported(&'static str),

    /// JSON encoding or decoding failed.
    #[error("json: {0}")]
    Json(String),

    /// I/O failure (file logger).
    #[error("io: {0}")]
    Io(String),
}

impl Error {
    /// Wrap this error for storage inside an `Outcome`.
    pub fn shared(self) -> DynError {
        Arc::new(self)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Check whether a shared error is one of this crate's sentinels.
pub fn as_crate_error(err: &DynError) -> Option<&Error> {
    err.downcast_ref::<Error>()
}
