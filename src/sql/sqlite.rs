// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! rusqlite bridge: lets `Optional<T>` and `Outcome<T>` be bound as
//! parameters and read as columns directly.
//!
//! SQLite only knows five storage classes. Booleans go out as integers and
//! timestamps as RFC 3339 text, both of which the scan rules accept back.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

use super::{FromSqlValue, Scan, SqlValue, ToSqlValue};
use crate::optional::Optional;
use crate::outcome::Outcome;

impl From<ValueRef<'_>> for SqlValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(n) => SqlValue::Integer(n),
            ValueRef::Real(x) => SqlValue::Real(x),
            ValueRef::Text(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => SqlValue::Text(text.to_owned()),
                Err(_) => SqlValue::Blob(bytes.to_vec()),
            },
            ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
        }
    }
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(n) => Value::Integer(n),
            SqlValue::Real(x) => Value::Real(x),
            SqlValue::Bool(b) => Value::Integer(i64::from(b)),
            SqlValue::Text(text) => Value::Text(text),
            SqlValue::Blob(bytes) => Value::Blob(bytes),
            SqlValue::Timestamp(ts) => Value::Text(ts.to_rfc3339()),
        }
    }
}

fn scan_column<C: Scan>(mut out: C, value: ValueRef<'_>) -> FromSqlResult<C> {
    out.scan(&SqlValue::from(value))
        .map_err(|err| FromSqlError::Other(Box::new(err)))?;
    Ok(out)
}

fn to_output<V: ToSqlValue>(value: &V) -> rusqlite::Result<ToSqlOutput<'_>> {
    let stored = value
        .to_sql_value()
        .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
    Ok(ToSqlOutput::Owned(stored.into()))
}

impl<T: FromSqlValue> FromSql for Optional<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        scan_column(Optional::none(), value)
    }
}

impl<T: FromSqlValue> FromSql for Outcome<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        scan_column(Outcome::default(), value)
    }
}

impl<T: ToSqlValue> ToSql for Optional<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        to_output(self)
    }
}

impl<T: ToSqlValue> ToSql for Outcome<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        to_output(self)
    }
}
