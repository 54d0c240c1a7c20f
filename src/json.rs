// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! serde support, so both containers work as plain struct fields.
//!
//! An empty `Optional` and an `Err` outcome encode as `null` and never fail.
//! A present value encodes through `T`'s own rules. Decoding `null` gives
//! `None` / `Err(Error::Null)`. Any other input is decoded into a fresh `T`,
//! and a decode failure fails the whole operation.
//!
//! Pair a field with `skip_serializing_if = "Optional::is_none"` (or
//! `"Outcome::is_err"`) to omit it entirely when empty.
//!
//! ```
//! use optres::{Optional, Outcome};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     #[serde(default, skip_serializing_if = "Optional::is_none")]
//!     email: Optional<String>,
//!     age: Outcome<u32>,
//! }
//!
//! let user: User = serde_json::from_str(r#"{"name":"ada","age":null}"#).unwrap();
//! assert!(user.email.is_none());
//! assert!(user.age.is_err());
//! assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"name":"ada","age":null}"#);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::optional::Optional;
use crate::outcome::Outcome;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    /// The error itself is never encoded; `Err` is just `null`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Outcome::success(value),
            None => Outcome::failure_shared(Error::Null.shared()),
        })
    }
}

impl<T: Serialize> Optional<T> {
    /// Encode as JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl<T: DeserializeOwned> Optional<T> {
    /// Decode from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<T: Serialize> Outcome<T> {
    pub fn to_json(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl<T: DeserializeOwned> Outcome<T> {
    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
