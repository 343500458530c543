// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Transformation logic that turns repository configuration and settings into
//! workflow matrices.
//!
//! [`generate_plan`] is pure: it never touches the environment or the
//! filesystem, which keeps the all-or-nothing emission in [`crate::emit`]
//! straightforward.

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::RepositoryConfig,
    ecosystem::Ecosystem,
    error::{self, Error},
    platform::{OperatingSystem, select_operating_systems},
    settings::Settings,
};

/// Output name carrying the coverage threshold.
pub const COVERAGE_THRESHOLD_OUTPUT: &str = "coverage-threshold";

/// Version/OS matrix for a single ecosystem.
///
/// Serializes as an object with exactly two keys: the ecosystem's version key
/// first, then `os`.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Matrix
{
    /// Ecosystem described by this matrix.
    pub ecosystem:         Ecosystem,
    /// Versions in configuration order, as written in the configuration.
    pub versions:          Vec<Value,>,
    /// Operating systems shared by every matrix of a plan.
    pub operating_systems: Vec<OperatingSystem,>,
}

impl Matrix
{
    /// Encodes the matrix as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](Error::Serialize) if encoding fails.
    pub fn to_compact_json(&self,) -> Result<String, Error,>
    {
        serde_json::to_string(self,).map_err(error::serialize_error,)
    }
}

impl Serialize for Matrix
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2,),)?;
        map.serialize_entry(self.ecosystem.version_key(), &self.versions,)?;
        map.serialize_entry("os", &self.operating_systems,)?;
        map.end()
    }
}

/// Everything derived from a single invocation.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct MatrixPlan
{
    /// One matrix per ecosystem, ordered as [`Ecosystem::ALL`].
    pub matrices:           Vec<Matrix,>,
    /// Operating systems selected by the include flags.
    pub operating_systems:  Vec<OperatingSystem,>,
    /// Coverage threshold as emitted, without a percent sign.
    pub coverage_threshold: String,
}

impl MatrixPlan
{
    /// Returns the matrix for `ecosystem`.
    pub fn matrix(&self, ecosystem: Ecosystem,) -> Option<&Matrix,>
    {
        self.matrices.iter().find(|matrix| matrix.ecosystem == ecosystem,)
    }

    /// Encodes every workflow output as `(name, value)` pairs in emission
    /// order: the four matrices followed by the coverage threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](Error::Serialize) if any matrix cannot be
    /// encoded.
    pub fn outputs(&self,) -> Result<Vec<(&'static str, String,),>, Error,>
    {
        let mut outputs = Vec::with_capacity(self.matrices.len() + 1,);
        for matrix in &self.matrices {
            outputs.push((matrix.ecosystem.output_name(), matrix.to_compact_json()?,),);
        }
        outputs.push((COVERAGE_THRESHOLD_OUTPUT, self.coverage_threshold.clone(),),);
        Ok(outputs,)
    }
}

impl Serialize for MatrixPlan
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.matrices.len() + 1,),)?;
        for matrix in &self.matrices {
            map.serialize_entry(matrix.ecosystem.output_name(), matrix,)?;
        }
        map.serialize_entry(COVERAGE_THRESHOLD_OUTPUT, &self.coverage_threshold,)?;
        map.end()
    }
}

/// Builds the matrices and coverage threshold for one run.
///
/// Versions absent from the configuration are replaced by a single-element
/// list holding the ecosystem's fallback. An explicitly empty list is kept as
/// is. The coverage threshold falls back to the configured default.
///
/// # Examples
///
/// ```
/// use ci_matrix::{Ecosystem, Settings, generate_plan, parse_config};
///
/// let config = parse_config(r#"{"ci":{"go":{"versions":["1.22","1.23"]}}}"#,)?;
/// let plan = generate_plan(&config, &Settings::default(),);
///
/// let go = plan.matrix(Ecosystem::Go,).expect("go matrix",);
/// assert_eq!(go.to_compact_json()?, r#"{"go-version":["1.22","1.23"],"os":["ubuntu-latest"]}"#);
/// assert_eq!(plan.coverage_threshold, "80");
/// # Ok::<(), ci_matrix::Error>(())
/// ```
pub fn generate_plan(config: &RepositoryConfig, settings: &Settings,) -> MatrixPlan
{
    let operating_systems = select_operating_systems(settings,);
    let ci = config.ci.clone().unwrap_or_default();

    let matrices = Ecosystem::ALL
        .iter()
        .map(|&ecosystem| {
            let versions = match ecosystem.configured_versions(&ci,) {
                Some(configured,) => configured.to_vec(),
                None => {
                    let fallback = settings.fallback_version(ecosystem,);
                    debug!("No {} versions configured, using fallback {}", ecosystem.label(), fallback);
                    vec![Value::String(fallback.to_owned(),)]
                }
            };

            Matrix {
                ecosystem,
                versions,
                operating_systems: operating_systems.clone(),
            }
        },)
        .collect();

    let coverage_threshold =
        match ci.coverage.as_ref().and_then(|coverage| coverage.rendered_threshold(),) {
            Some(threshold,) => threshold,
            None => {
                debug!(
                    "No coverage threshold configured, using fallback {}",
                    settings.fallback_coverage_threshold
                );
                settings.fallback_coverage_threshold.clone()
            }
        };

    MatrixPlan {
        matrices,
        operating_systems,
        coverage_threshold,
    }
}
