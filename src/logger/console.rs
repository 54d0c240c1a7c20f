// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Logs to stdout.

use std::io::Write;

use super::queue::LineQueue;
use super::{format_line, LogSink, LoggerConfig};

pub struct ConsoleLogger {
    queue: LineQueue,
    debug: bool,
}

impl ConsoleLogger {
    pub fn new(config: &LoggerConfig) -> Self {
        let queue = LineQueue::new(
            "console",
            config.buffer_size,
            Box::new(|line: &str| {
                let mut out = std::io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }),
        );
        ConsoleLogger {
            queue,
            debug: config.debug,
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        ConsoleLogger::new(&LoggerConfig::default())
    }
}

impl LogSink for ConsoleLogger {
    fn start(&self) {
        self.queue.start();
    }

    fn stop(&self) {
        self.queue.stop();
    }

    fn write(&self, message: &str) {
        let mut line = format_line(message);
        line.push('\n');
        self.queue.push(line);
    }

    fn debug_enabled(&self) -> bool {
        self.debug
    }
}
