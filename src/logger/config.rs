// Copyright 2025-present The optres Authors
// SPDX-License-Identifier: Apache-2.0

//! Logger configuration: defaults, environment overrides, serde loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Path of the file backend's log file.
pub const LOG_FILE_ENV: &str = "OPTRES_LOG_FILE";
/// `1`/`true` or `0`/`false`: whether `write_debug*` lines are emitted.
pub const LOG_DEBUG_ENV: &str = "OPTRES_LOG_DEBUG";

/// Capacity of the delivery queue in front of the console and file backends.
pub const DEFAULT_BUFFER_SIZE: usize = 200;
pub const DEFAULT_LOG_FILE: &str = "./log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub buffer_size: usize,
    pub debug: bool,
    pub file_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
            debug: cfg!(debug_assertions),
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `OPTRES_LOG_FILE` and `OPTRES_LOG_DEBUG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LoggerConfig::default();

        match lookup(LOG_FILE_ENV) {
            Some(path) if !path.is_empty() => config.file_path = PathBuf::from(path),
            Some(_) => tracing::debug!(
                default = %config.file_path.display(),
                "{} is set but empty, using default",
                LOG_FILE_ENV
            ),
            None => tracing::debug!(
                default = %config.file_path.display(),
                "{} is not set, using default",
                LOG_FILE_ENV
            ),
        }

        if let Some(flag) = lookup(LOG_DEBUG_ENV) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.debug = true,
                "0" | "false" | "no" | "off" => config.debug = false,
                other => tracing::warn!(value = other, "ignoring unrecognised {}", LOG_DEBUG_ENV),
            }
        }

        config
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Queue capacity for the console and file backends. Zero is treated as
    /// one, so a line written before `start` never blocks forever.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}
