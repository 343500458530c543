// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Language ecosystems that receive a version matrix.

use serde_json::Value;

use crate::config::CiSection;

/// One of the four supported language runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum Ecosystem
{
    /// Go toolchain.
    Go,
    /// Python interpreter.
    Python,
    /// Rust toolchain.
    Rust,
    /// Node.js runtime used by the frontend.
    Node,
}

impl Ecosystem
{
    /// Every ecosystem in emission order.
    pub const ALL: [Self; 4] = [Self::Go, Self::Python, Self::Rust, Self::Node,];

    /// Name of the workflow output carrying this ecosystem's matrix.
    pub const fn output_name(self,) -> &'static str
    {
        match self {
            Self::Go => "go-matrix",
            Self::Python => "python-matrix",
            Self::Rust => "rust-matrix",
            Self::Node => "frontend-matrix",
        }
    }

    /// Matrix key holding the version list.
    pub const fn version_key(self,) -> &'static str
    {
        match self {
            Self::Go => "go-version",
            Self::Python => "python-version",
            Self::Rust => "rust-version",
            Self::Node => "node-version",
        }
    }

    /// Human readable label used in the step summary.
    pub const fn label(self,) -> &'static str
    {
        match self {
            Self::Go => "Go",
            Self::Python => "Python",
            Self::Rust => "Rust",
            Self::Node => "Node.js",
        }
    }

    /// Looks up the configured versions for this ecosystem.
    ///
    /// Node versions come from `ci.frontend.node-versions`; the others from
    /// `ci.<ecosystem>.versions`.
    pub fn configured_versions(self, ci: &CiSection,) -> Option<&[Value],>
    {
        let versions = match self {
            Self::Go => ci.go.as_ref().and_then(|section| section.versions.as_ref(),),
            Self::Python => ci.python.as_ref().and_then(|section| section.versions.as_ref(),),
            Self::Rust => ci.rust.as_ref().and_then(|section| section.versions.as_ref(),),
            Self::Node => ci.frontend.as_ref().and_then(|section| section.node_versions.as_ref(),),
        };

        versions.map(Vec::as_slice,)
    }
}
