// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Runner operating systems included in every matrix.

use serde::Serialize;
use tracing::debug;

use crate::settings::Settings;

/// Hosted runner image families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize,)]
pub enum OperatingSystem
{
    /// `ubuntu-latest`.
    #[serde(rename = "ubuntu-latest")]
    Linux,
    /// `macos-latest`.
    #[serde(rename = "macos-latest")]
    MacOs,
    /// `windows-latest`.
    #[serde(rename = "windows-latest")]
    Windows,
}

impl OperatingSystem
{
    /// Runner label written into the matrix.
    pub const fn runner_label(self,) -> &'static str
    {
        match self {
            Self::Linux => "ubuntu-latest",
            Self::MacOs => "macos-latest",
            Self::Windows => "windows-latest",
        }
    }
}

/// Returns the enabled operating systems, always ordered Linux, macOS,
/// Windows.
///
/// # Examples
///
/// ```
/// use ci_matrix::{OperatingSystem, Settings, select_operating_systems};
///
/// let settings = Settings {
///     include_windows: "true".to_owned(),
///     ..Settings::default()
/// };
/// assert_eq!(
///     select_operating_systems(&settings),
///     vec![OperatingSystem::Linux, OperatingSystem::Windows]
/// );
/// ```
pub fn select_operating_systems(settings: &Settings,) -> Vec<OperatingSystem,>
{
    let candidates = [
        (OperatingSystem::Linux, settings.includes_linux(),),
        (OperatingSystem::MacOs, settings.includes_macos(),),
        (OperatingSystem::Windows, settings.includes_windows(),),
    ];

    let selected: Vec<_,> =
        candidates.into_iter().filter_map(|(os, enabled,)| enabled.then_some(os,),).collect();
    debug!("Selected {} operating systems", selected.len());
    selected
}
