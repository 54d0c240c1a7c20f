// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Forwards lines to `tracing`, leaving timestamps and delivery to the
//! installed subscriber.

use std::error::Error as StdError;

use super::LogSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    debug: bool,
}

impl TracingLogger {
    pub const fn new(debug: bool) -> Self {
        TracingLogger { debug }
    }
}

impl LogSink for TracingLogger {
    fn write(&self, message: &str) {
        tracing::info!(target: "optres::log", "{message}");
    }

    fn debug_enabled(&self) -> bool {
        self.debug
    }

    fn write_request(&self, message: &str, request_id: &str) {
        tracing::info!(target: "optres::log", request_id, "{message}");
    }

    fn write_err(&self, err: Option<&(dyn StdError + 'static)>) -> u32 {
        match err {
            Some(err) => {
                tracing::error!(target: "optres::log", error = err, "Error: {err}");
                1
            }
            None => 0,
        }
    }

    fn write_err_request(&self, err: Option<&(dyn StdError + 'static)>, request_id: &str) -> u32 {
        match err {
            Some(err) => {
                tracing::error!(target: "optres::log", error = err, request_id, "Error: {err}");
                1
            }
            None => 0,
        }
    }

    fn write_err_msg_request(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        message: &str,
        request_id: &str,
    ) -> u32 {
        match err {
            Some(err) => {
                tracing::error!(target: "optres::log", error = err, request_id, "Error: {err} ({message})");
                1
            }
            None => 0,
        }
    }
}
