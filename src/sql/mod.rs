// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Database column adapters.
//!
//! Drivers hand back loosely typed column values. [`SqlValue`] is that value,
//! and [`Scan`] is the single-column scan capability that fills a container
//! from one. The conversion from a `SqlValue` into the contained `T` is picked
//! at compile time through [`FromSqlValue`]:
//!
//! - std and chrono types get the built-in rules in [`convert`]: RFC 3339
//!   parsing for timestamps fed bytes or text, UTF-8 decoding for strings fed
//!   bytes, then exact-variant assignment (with range checks for narrower
//!   integers).
//! - Any other type consumes the source itself by implementing `FromSqlValue`.
//!
//! Going the other way, [`ToSqlValue`] produces a storable value. Empty
//! containers always produce [`SqlValue::Null`].
//!
//! # Example
//!
//! ```
//! use optres::sql::{Scan, SqlValue};
//! use optres::Optional;
//!
//! let mut name = Optional::<String>::none();
//! name.scan(&SqlValue::Blob(b"ada".to_vec())).unwrap();
//! assert_eq!(name.as_option().map(String::as_str), Some("ada"));
//!
//! name.scan(&SqlValue::Null).unwrap();
//! assert!(name.is_none());
//! ```

pub mod convert;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use convert::AsText;

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A single column value as handed over by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Bool(bool),
    Text(String),
    Blob(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Name of the variant, used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Real(_) => "real",
            SqlValue::Bool(_) => "bool",
            SqlValue::Text(_) => "text",
            SqlValue::Blob(_) => "blob",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }
}

/// Fill `self` in place from one column value.
pub trait Scan {
    fn scan(&mut self, src: &SqlValue) -> Result<(), Error>;
}

/// Build a value from a non-null column value.
pub trait FromSqlValue: Sized {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error>;
}

/// Produce the value to write back to a column.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> Result<SqlValue, Error>;
}

/// The error for a source no rule can convert into `T`.
pub fn mismatch<T>(src: &SqlValue) -> Error {
    Error::TypeMismatch {
        found: src.type_name(),
        expected: std::any::type_name::<T>(),
    }
}

impl<T: FromSqlValue> Scan for Optional<T> {
    /// A null source empties the container without failing. A conversion
    /// failure also empties it, and the error is returned.
    fn scan(&mut self, src: &SqlValue) -> Result<(), Error> {
        if src.is_null() {
            self.reset_to_none();
            return Ok(());
        }
        match T::from_sql_value(src) {
            Ok(value) => {
                self.inner = Some(value);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(source = src.type_name(), error = %err, "optional scan failed");
                self.reset_to_none();
                Err(err)
            }
        }
    }
}

impl<T: FromSqlValue> Scan for Outcome<T> {
    /// A null source leaves `Err(Error::Null)` and reports no failure. A
    /// conversion failure is stored in the container and also returned.
    fn scan(&mut self, src: &SqlValue) -> Result<(), Error> {
        if src.is_null() {
            self.reset_to_err(Error::Null);
            return Ok(());
        }
        match T::from_sql_value(src) {
            Ok(value) => {
                self.inner = Ok(value);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(source = src.type_name(), error = %err, "outcome scan failed");
                self.reset_to_err(err.clone());
                Err(err)
            }
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Optional<T> {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        let mut out = Optional::none();
        out.scan(src)?;
        Ok(out)
    }
}

impl<T: FromSqlValue> FromSqlValue for Outcome<T> {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        let mut out = Outcome::default();
        out.scan(src)?;
        Ok(out)
    }
}

impl<T: ToSqlValue> ToSqlValue for Optional<T> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        match self.as_option() {
            Some(value) => value.to_sql_value(),
            None => Ok(SqlValue::Null),
        }
    }
}

impl<T: ToSqlValue> ToSqlValue for Outcome<T> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        match self.value() {
            Some(value) => value.to_sql_value(),
            None => Ok(SqlValue::Null),
        }
    }
}
