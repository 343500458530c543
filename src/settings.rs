// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Environment-driven settings for a single generator run.
//!
//! The binary reads every value once at startup through clap, which consults
//! the environment variables named by the constants below. Library callers
//! and tests can build the same struct with [`Settings::from_lookup`].
//! Boolean switches keep their raw string form and are interpreted by the
//! typed accessors.
//!
//! A variable that is set but empty is taken as an empty string, not as the
//! default: an empty `INCLUDE_LINUX` disables Linux and an empty fallback
//! version yields a `[""]` version list.
use std::path::PathBuf;

use clap::Args;

use crate::ecosystem::Ecosystem;

pub const REPOSITORY_CONFIG: &str = "REPOSITORY_CONFIG";
pub const INCLUDE_LINUX: &str = "INCLUDE_LINUX";
pub const INCLUDE_MACOS: &str = "INCLUDE_MACOS";
pub const INCLUDE_WINDOWS: &str = "INCLUDE_WINDOWS";
pub const FALLBACK_GO_VERSION: &str = "FALLBACK_GO_VERSION";
pub const FALLBACK_PYTHON_VERSION: &str = "FALLBACK_PYTHON_VERSION";
pub const FALLBACK_RUST_VERSION: &str = "FALLBACK_RUST_VERSION";
pub const FALLBACK_NODE_VERSION: &str = "FALLBACK_NODE_VERSION";
pub const FALLBACK_COVERAGE_THRESHOLD: &str = "FALLBACK_COVERAGE_THRESHOLD";
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
pub const GITHUB_STEP_SUMMARY: &str = "GITHUB_STEP_SUMMARY";

const DEFAULT_REPOSITORY_CONFIG: &str = "{}";
const DEFAULT_INCLUDE_LINUX: &str = "true";
const DEFAULT_INCLUDE_MACOS: &str = "false";
const DEFAULT_INCLUDE_WINDOWS: &str = "false";
const DEFAULT_GO_VERSION: &str = "1.23";
const DEFAULT_PYTHON_VERSION: &str = "3.12";
const DEFAULT_RUST_VERSION: &str = "1.75";
const DEFAULT_NODE_VERSION: &str = "22";
const DEFAULT_COVERAGE_THRESHOLD: &str = "80";

/// Inputs controlling matrix generation.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Settings {
    /// Repository configuration as a JSON document.
    #[arg(long = "repository-config", env = REPOSITORY_CONFIG, default_value = DEFAULT_REPOSITORY_CONFIG, value_name = "JSON")]
    pub repository_config: String,

    /// Include the Linux runner ("true", case-insensitive).
    #[arg(long = "include-linux", env = INCLUDE_LINUX, default_value = DEFAULT_INCLUDE_LINUX, value_name = "BOOL")]
    pub include_linux: String,

    /// Include the macOS runner ("true", case-insensitive).
    #[arg(long = "include-macos", env = INCLUDE_MACOS, default_value = DEFAULT_INCLUDE_MACOS, value_name = "BOOL")]
    pub include_macos: String,

    /// Include the Windows runner ("true", case-insensitive).
    #[arg(long = "include-windows", env = INCLUDE_WINDOWS, default_value = DEFAULT_INCLUDE_WINDOWS, value_name = "BOOL")]
    pub include_windows: String,

    /// Go version used when the configuration lists none.
    #[arg(long = "fallback-go-version", env = FALLBACK_GO_VERSION, default_value = DEFAULT_GO_VERSION, value_name = "VERSION")]
    pub fallback_go_version: String,

    /// Python version used when the configuration lists none.
    #[arg(long = "fallback-python-version", env = FALLBACK_PYTHON_VERSION, default_value = DEFAULT_PYTHON_VERSION, value_name = "VERSION")]
    pub fallback_python_version: String,

    /// Rust version used when the configuration lists none.
    #[arg(long = "fallback-rust-version", env = FALLBACK_RUST_VERSION, default_value = DEFAULT_RUST_VERSION, value_name = "VERSION")]
    pub fallback_rust_version: String,

    /// Node.js version used when the configuration lists none.
    #[arg(long = "fallback-node-version", env = FALLBACK_NODE_VERSION, default_value = DEFAULT_NODE_VERSION, value_name = "VERSION")]
    pub fallback_node_version: String,

    /// Coverage threshold used when the configuration sets none.
    #[arg(long = "fallback-coverage-threshold", env = FALLBACK_COVERAGE_THRESHOLD, default_value = DEFAULT_COVERAGE_THRESHOLD, value_name = "PERCENT")]
    pub fallback_coverage_threshold: String,

    /// File receiving `name=value` output lines.
    #[arg(long = "github-output", env = GITHUB_OUTPUT, value_name = "PATH")]
    pub github_output: Option<String>,

    /// File receiving the Markdown step summary.
    #[arg(long = "github-step-summary", env = GITHUB_STEP_SUMMARY, value_name = "PATH")]
    pub github_step_summary: Option<String>
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Settings {
    /// Builds settings from an arbitrary variable lookup.
    ///
    /// Missing variables take their documented defaults. A variable that is
    /// present but empty is kept as an empty string, except for the two sink
    /// paths where an empty value means "no sink".
    ///
    /// # Examples
    ///
    /// ```
    /// use ci_matrix::Settings;
    ///
    /// let settings = Settings::from_lookup(|key| {
    ///     (key == "INCLUDE_MACOS").then(|| "TRUE".to_owned())
    /// });
    /// assert!(settings.includes_linux());
    /// assert!(settings.includes_macos());
    /// assert!(!settings.includes_windows());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>
    {
        let value = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Self {
            repository_config:           value(REPOSITORY_CONFIG, DEFAULT_REPOSITORY_CONFIG),
            include_linux:               value(INCLUDE_LINUX, DEFAULT_INCLUDE_LINUX),
            include_macos:               value(INCLUDE_MACOS, DEFAULT_INCLUDE_MACOS),
            include_windows:             value(INCLUDE_WINDOWS, DEFAULT_INCLUDE_WINDOWS),
            fallback_go_version:         value(FALLBACK_GO_VERSION, DEFAULT_GO_VERSION),
            fallback_python_version:     value(FALLBACK_PYTHON_VERSION, DEFAULT_PYTHON_VERSION),
            fallback_rust_version:       value(FALLBACK_RUST_VERSION, DEFAULT_RUST_VERSION),
            fallback_node_version:       value(FALLBACK_NODE_VERSION, DEFAULT_NODE_VERSION),
            fallback_coverage_threshold: value(
                FALLBACK_COVERAGE_THRESHOLD,
                DEFAULT_COVERAGE_THRESHOLD
            ),
            github_output:               lookup(GITHUB_OUTPUT),
            github_step_summary:         lookup(GITHUB_STEP_SUMMARY)
        }
    }

    /// Whether `ubuntu-latest` joins the OS list.
    pub fn includes_linux(&self) -> bool {
        is_enabled(&self.include_linux)
    }

    /// Whether `macos-latest` joins the OS list.
    pub fn includes_macos(&self) -> bool {
        is_enabled(&self.include_macos)
    }

    /// Whether `windows-latest` joins the OS list.
    pub fn includes_windows(&self) -> bool {
        is_enabled(&self.include_windows)
    }

    /// Returns the single version used for `ecosystem` when the repository
    /// configuration does not list any.
    pub fn fallback_version(&self, ecosystem: Ecosystem) -> &str {
        match ecosystem {
            Ecosystem::Go => &self.fallback_go_version,
            Ecosystem::Python => &self.fallback_python_version,
            Ecosystem::Rust => &self.fallback_rust_version,
            Ecosystem::Node => &self.fallback_node_version
        }
    }

    /// Path of the output sink, if one is configured.
    pub fn output_path(&self) -> Option<PathBuf> {
        non_empty_path(self.github_output.as_deref())
    }

    /// Path of the step summary sink, if one is configured.
    pub fn summary_path(&self) -> Option<PathBuf> {
        non_empty_path(self.github_step_summary.as_deref())
    }
}

fn is_enabled(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

fn non_empty_path(raw: Option<&str>) -> Option<PathBuf> {
    raw.filter(|value| !value.is_empty()).map(PathBuf::from)
}
