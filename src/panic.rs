// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Panic payload raised by the `expect`/`unwrap` family.
//!
//! Library unwraps panic with an [`UnwrapPanic`] payload instead of a bare
//! string. That payload is the marker [`crate::catch_unwrap`] looks for: a
//! panic carrying anything else is not ours and gets re-raised untouched.

use std::any::Any;
use std::fmt;

/// Which container raised the panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Optional,
    Outcome,
}

/// Marker payload for panics raised by this crate's unwrap operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapPanic {
    kind: ContainerKind,
    message: String,
}

impl UnwrapPanic {
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnwrapPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Panic with an [`UnwrapPanic`] payload.
#[cold]
#[track_caller]
pub(crate) fn raise(kind: ContainerKind, message: impl Into<String>) -> ! {
    std::panic::panic_any(UnwrapPanic {
        kind,
        message: message.into(),
    })
}

/// Extract a readable message from any panic payload.
///
/// Handles our own marker plus the `&str`/`String` payloads produced by `panic!`.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(marker) = payload.downcast_ref::<UnwrapPanic>() {
        Some(marker.message.clone())
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some((*s).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}
