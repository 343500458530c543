#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the matrix generator crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.

use std::path::{Path, PathBuf};

/// Unified error type returned by the generator and the CLI.
///
/// Only [`Error::Parse`] is expected in normal operation: every other missing
/// input is defaulted rather than rejected. The remaining variants surface
/// failures of the surrounding environment (unwritable sinks, broken stdout).
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps JSON decoding errors for the repository configuration.
    #[error("failed to parse repository configuration: {source}")]
    Parse {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Wraps serialization errors when encoding matrices.
    #[error("failed to serialize matrix output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Wraps I/O errors that occur while writing results to stdout.
    #[error("failed to write to standard output: {source}")]
    Stdout {
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps I/O errors that occur while appending to an output sink.
    #[error("failed to append to sink at {path:?}: {source}")]
    Sink {
        /// Location of the sink file.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

/// Creates an [`Error::Serialize`] variant from a serde_json failure.
pub fn serialize_error(source: serde_json::Error) -> Error {
    Error::Serialize {
        source
    }
}

/// Creates an [`Error::Stdout`] variant from a failed console write.
pub fn stdout_error(source: std::io::Error) -> Error {
    Error::Stdout {
        source
    }
}

/// Creates an [`Error::Sink`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the sink file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn sink_error(path: &Path, source: std::io::Error) -> Error {
    Error::Sink {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn to_display_string_matches_display() {
        let source = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let error: Error = source.into();
        assert_eq!(error.to_string(), error.to_display_string());
        assert!(
            error
                .to_display_string()
                .starts_with("failed to parse repository configuration:")
        );
    }

    #[test]
    fn serde_json_conversion_maps_to_parse_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn serialize_error_helper_maps_to_serialize_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let mapped = super::serialize_error(invalid);
        assert!(matches!(mapped, Error::Serialize { .. }));
    }

    #[test]
    fn stdout_error_helper_maps_to_stdout_variant() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error = super::stdout_error(io_error);
        assert!(matches!(error, Error::Stdout { .. }));
        assert!(
            error
                .to_display_string()
                .starts_with("failed to write to standard output:")
        );
    }

    #[test]
    fn sink_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/github_output");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = super::sink_error(path, io_error);

        match error {
            Error::Sink {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected sink error, got {other:?}")
        }
    }
}
