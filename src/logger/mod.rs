// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented logging with pluggable backends.
//!
//! Every backend implements [`LogSink`]. Lines are prefixed with a Unix-date
//! timestamp (`Mon Jan  2 15:04:05 +00:00 2006 : message`), request-scoped
//! lines additionally carry the request id, and error lines read
//! `Error: <description>`. The `*_debug` variants only emit when the backend
//! was configured with `debug` on.
//!
//! | Backend | Destination |
//! |---------|-------------|
//! | [`ConsoleLogger`] | stdout, through a bounded queue and one worker |
//! | [`FileLogger`] | an append-only file, through a bounded queue and one worker |
//! | [`NullLogger`] | nowhere |
//! | [`TracingLogger`] | `tracing` events, for hosts with a subscriber installed |
//!
//! A process-wide sink can be installed once with [`init`] and fetched with
//! [`instance`]. Before `init`, `instance` hands out a silent [`NullLogger`].

mod config;
mod console;
mod file;
mod null;
mod queue;
mod tracing_sink;

pub use config::{
    LoggerConfig, DEFAULT_BUFFER_SIZE, DEFAULT_LOG_FILE, LOG_DEBUG_ENV, LOG_FILE_ENV,
};
pub use console::ConsoleLogger;
pub use file::FileLogger;
pub use null::NullLogger;
pub use tracing_sink::TracingLogger;

use std::error::Error as StdError;
use std::sync::OnceLock;

use chrono::Local;
use serde::Serialize;

/// `Mon Jan  2 15:04:05 +00:00 2006`
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// A logging backend.
///
/// Backends only have to provide [`write`](LogSink::write) and
/// [`debug_enabled`](LogSink::debug_enabled). Everything else is derived from
/// those two unless the backend has a better native representation.
pub trait LogSink: Send + Sync {
    /// Begin delivering lines. Backends without a worker ignore it.
    fn start(&self) {}

    /// Flush what is queued and stop delivering. Safe to call twice.
    fn stop(&self) {}

    fn write(&self, message: &str);

    fn debug_enabled(&self) -> bool;

    fn write_request(&self, message: &str, request_id: &str) {
        self.write(&request_line(message, request_id));
    }

    /// Log `err` if there is one. Returns how many errors were written.
    fn write_err(&self, err: Option<&(dyn StdError + 'static)>) -> u32 {
        match err {
            Some(err) => {
                self.write(&error_line(err));
                1
            }
            None => 0,
        }
    }

    fn write_err_request(&self, err: Option<&(dyn StdError + 'static)>, request_id: &str) -> u32 {
        match err {
            Some(err) => {
                self.write_request(&error_line(err), request_id);
                1
            }
            None => 0,
        }
    }

    /// Like [`write_err_request`](LogSink::write_err_request) with a note
    /// describing what failed.
    fn write_err_msg_request(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        message: &str,
        request_id: &str,
    ) -> u32 {
        match err {
            Some(err) => {
                self.write_request(&error_msg_line(err, message), request_id);
                1
            }
            None => 0,
        }
    }

    fn write_debug(&self, message: &str) {
        if self.debug_enabled() {
            self.write(message);
        }
    }

    fn write_request_debug(&self, message: &str, request_id: &str) {
        if self.debug_enabled() {
            self.write_request(message, request_id);
        }
    }

    /// Counts the error even when debug output is off.
    fn write_err_debug(&self, err: Option<&(dyn StdError + 'static)>) -> u32 {
        if self.debug_enabled() {
            self.write_err(err)
        } else {
            u32::from(err.is_some())
        }
    }

    fn write_err_request_debug(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        request_id: &str,
    ) -> u32 {
        if self.debug_enabled() {
            self.write_err_request(err, request_id)
        } else {
            u32::from(err.is_some())
        }
    }

    fn write_err_msg_request_debug(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        message: &str,
        request_id: &str,
    ) -> u32 {
        if self.debug_enabled() {
            self.write_err_msg_request(err, message, request_id)
        } else {
            u32::from(err.is_some())
        }
    }
}

/// Prefix `message` with the current local time.
pub fn format_line(message: &str) -> String {
    format!("{} : {}", Local::now().format(TIMESTAMP_FORMAT), message)
}

pub(crate) fn request_line(message: &str, request_id: &str) -> String {
    format!("{request_id} : {message}")
}

pub(crate) fn error_line(err: &dyn StdError) -> String {
    format!("Error: {err}")
}

pub(crate) fn error_msg_line(err: &dyn StdError, message: &str) -> String {
    format!("Error: {err} ({message})")
}

/// Pretty-printed JSON dump of `entity`, headed by its type name.
///
/// Never fails: an entity that cannot be encoded yields a fixed notice.
pub fn render_json<T: Serialize + ?Sized>(entity: &T) -> String {
    match serde_json::to_string_pretty(entity) {
        Ok(body) => format!("{}:\n{}\n", std::any::type_name::<T>(), body),
        Err(err) => {
            tracing::debug!(error = %err, "entity could not be rendered as json");
            "Error parsing json data".to_string()
        }
    }
}

static INSTANCE: OnceLock<Box<dyn LogSink>> = OnceLock::new();
static FALLBACK: NullLogger = NullLogger::new(false);

/// Install the process-wide sink. The first call wins; later calls return
/// `false` and leave the installed sink alone.
pub fn init<S: LogSink + 'static>(sink: S) -> bool {
    let mut installed = false;
    INSTANCE.get_or_init(|| {
        installed = true;
        Box::new(sink)
    });
    if !installed {
        tracing::debug!("logger already initialised, keeping the existing sink");
    }
    installed
}

/// The installed sink, or a silent one when none was installed.
pub fn instance() -> &'static dyn LogSink {
    match INSTANCE.get() {
        Some(sink) => sink.as_ref(),
        None => &FALLBACK,
    }
}
