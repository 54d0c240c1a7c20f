// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Appends to a log file, flushing after every line.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::queue::LineQueue;
use super::{format_line, LogSink, LoggerConfig};
use crate::error::Error;

pub struct FileLogger {
    queue: LineQueue,
    path: PathBuf,
    debug: bool,
}

impl FileLogger {
    /// Open (creating if needed) `config.file_path` for appending.
    pub fn new(config: &LoggerConfig) -> Result<Self, Error> {
        let mut file = open_append(&config.file_path)?;
        tracing::debug!(path = %config.file_path.display(), "file logger opened");

        let queue = LineQueue::new(
            "file",
            config.buffer_size,
            Box::new(move |line: &str| {
                file.write_all(line.as_bytes())?;
                file.flush()?;
                file.sync_data()
            }),
        );

        Ok(FileLogger {
            queue,
            path: config.file_path.clone(),
            debug: config.debug,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_append(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| Error::Io(format!("{}: {err}", path.display())))
}

impl LogSink for FileLogger {
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
