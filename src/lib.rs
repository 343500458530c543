// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for generating GitHub Actions test matrices.
//!
//! The library reads a repository configuration document plus a handful of
//! environment settings and derives one version/OS matrix per ecosystem (Go,
//! Python, Rust, Node.js) and a coverage threshold. Results are appended to
//! the workflow output and step summary files when those are configured.

mod config;
mod ecosystem;
mod emit;
mod error;
mod matrix;
mod platform;
mod settings;
mod sink;
mod summary;

pub use config::{
    CiSection, CoverageSection, FrontendSection, RepositoryConfig, VersionsSection, parse_config,
};
pub use ecosystem::Ecosystem;
pub use emit::{SUCCESS_MESSAGE, emit_plan, plan_from_settings, run};
pub use error::{Error, serialize_error, stdout_error};
pub use matrix::{COVERAGE_THRESHOLD_OUTPUT, Matrix, MatrixPlan, generate_plan};
pub use platform::{OperatingSystem, select_operating_systems};
pub use settings::Settings;
pub use sink::{OutputSink, Sink};
pub use summary::{SUMMARY_HEADER, render_summary};
