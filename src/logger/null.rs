// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

use super::LogSink;

/// Discards every line. Error helpers still report their counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger {
    debug: bool,
}

impl NullLogger {
    pub const fn new(debug: bool) -> Self {
        NullLogger { debug }
    }
}

impl LogSink for NullLogger {
    fn write(&self, _message: &str) {}

    fn debug_enabled(&self) -> bool {
        self.debug
    }
}
