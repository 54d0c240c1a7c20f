// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Built-in column conversions for std and chrono types.
//!
//! Rules are tried in a fixed order for each destination:
//!
//! 1. timestamps fed bytes or text are parsed as RFC 3339,
//! 2. strings fed bytes are decoded as UTF-8,
//! 3. otherwise the source variant must match the destination exactly.
//!    Integers narrower than `i64` are range checked.
//!
//! Anything else is a [`Error::TypeMismatch`].

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use super::{mismatch, FromSqlValue, SqlValue, ToSqlValue};
use crate::error::Error;

fn parse_rfc3339(text: &str) -> Result<DateTime<FixedOffset>, Error> {
    DateTime::parse_from_rfc3339(text).map_err(|e| Error::Timestamp(format!("{text:?}: {e}")))
}

fn utf8(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|e| Error::Utf8(e.to_string()))
}

impl FromSqlValue for DateTime<Utc> {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Blob(bytes) => Ok(parse_rfc3339(utf8(bytes)?)?.with_timezone(&Utc)),
            SqlValue::Text(text) => Ok(parse_rfc3339(text)?.with_timezone(&Utc)),
            SqlValue::Timestamp(ts) => Ok(*ts),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromSqlValue for DateTime<FixedOffset> {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Blob(bytes) => parse_rfc3339(utf8(bytes)?),
            SqlValue::Text(text) => parse_rfc3339(text),
            SqlValue::Timestamp(ts) => Ok(ts.fixed_offset()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromSqlValue for String {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Blob(bytes) => utf8(bytes).map(str::to_owned),
            SqlValue::Text(text) => Ok(text.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromSqlValue for Vec<u8> {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Blob(bytes) => Ok(bytes.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromSqlValue for i64 {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Integer(n) => Ok(*n),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),*) => {$(
        impl FromSqlValue for $ty {
            fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
                match src {
                    SqlValue::Integer(n) => <$ty>::try_from(*n).map_err(|_| Error::OutOfRange {
                        value: n.to_string(),
                        target: stringify!($ty),
                    }),
                    other => Err(mismatch::<Self>(other)),
                }
            }
        }
    )*};
}

narrow_integer!(i8, i16, i32, u8, u16, u32, u64, usize, isize);

impl FromSqlValue for f64 {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Real(x) => Ok(*x),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromSqlValue for f32 {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Real(x) if x.is_finite() && x.abs() > f64::from(f32::MAX) => {
                Err(Error::OutOfRange {
                    value: x.to_string(),
                    target: "f32",
                })
            }
            SqlValue::Real(x) => Ok(*x as f32),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromSqlValue for bool {
    /// SQLite has no boolean storage class, so `0`/`1` integers are accepted too.
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Bool(b) => Ok(*b),
            SqlValue::Integer(0) => Ok(false),
            SqlValue::Integer(1) => Ok(true),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Box<T> {
    fn from_sql_value(src: &SqlValue) -> Result<Self, Error> {
        T::from_sql_value(src).map(Box::new)
    }
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

impl ToSqlValue for str {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Text(self.to_owned()))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Text(self.clone()))
    }
}

impl ToSqlValue for [u8] {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Blob(self.to_vec()))
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Blob(self.clone()))
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Bool(*self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Real(*self))
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Real(f64::from(*self)))
    }
}

macro_rules! lossless_integer {
    ($($ty:ty),*) => {$(
        impl ToSqlValue for $ty {
            fn to_sql_value(&self) -> Result<SqlValue, Error> {
                Ok(SqlValue::Integer(i64::from(*self)))
            }
        }
    )*};
}

lossless_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer {
    ($($ty:ty),*) => {$(
        impl ToSqlValue for $ty {
            /// Values above `i64::MAX` have no storable representation.
            fn to_sql_value(&self) -> Result<SqlValue, Error> {
                i64::try_from(*self)
                    .map(SqlValue::Integer)
                    .map_err(|_| Error::Unsupported(stringify!($ty)))
            }
        }
    )*};
}

wide_integer!(u64, usize, isize);

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Timestamp(*self))
    }
}

impl ToSqlValue for DateTime<FixedOffset> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Timestamp(self.with_timezone(&Utc)))
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        (**self).to_sql_value()
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for Box<T> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        (**self).to_sql_value()
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        match self {
            Some(value) => value.to_sql_value(),
            None => Ok(SqlValue::Null),
        }
    }
}

/// Stores any `Display` type as its rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsText<T>(pub T);

impl<T: fmt::Display> ToSqlValue for AsText<T> {
    fn to_sql_value(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Text(self.0.to_string()))
    }
}
