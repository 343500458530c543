// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Append-only file sinks used by GitHub Actions.
//!
//! A sink without a path swallows writes, mirroring how the runner omits
//! `GITHUB_OUTPUT` and `GITHUB_STEP_SUMMARY` outside of workflow steps.
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::error::{self, Error};

/// Optional append-only destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    path: Option<PathBuf>
}

impl Sink {
    /// Creates a sink writing to `path`, or a disabled sink for `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path
        }
    }

    /// Sink that discards every write.
    pub fn disabled() -> Self {
        Self {
            path: None
        }
    }

    /// Destination file, if the sink is enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends `text` followed by a newline.
    ///
    /// The file is created when missing and closed before returning. Existing
    /// contents are never truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`](Error::Sink) when the file cannot be opened or
    /// written.
    pub fn append_line(&self, text: &str) -> Result<(), Error> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| error::sink_error(path, source))?;
        writeln!(file, "{text}").map_err(|source| error::sink_error(path, source))
    }
}

/// Sink receiving `name=value` workflow outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSink {
    inner: Sink
}

impl OutputSink {
    /// Wraps `inner` so writes become `name=value` lines.
    pub fn new(inner: Sink) -> Self {
        Self {
            inner
        }
    }

    /// Appends a single `name=value` line.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Sink`](Error::Sink) from the underlying file.
    pub fn write(&self, name: &str, value: &str) -> Result<(), Error> {
        debug!("Writing output {name}");
        self.inner.append_line(&format!("{name}={value}"))
    }
}
