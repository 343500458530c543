// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository configuration schema consumed by the matrix generator.
//!
//! The types mirror the JSON document supplied through `REPOSITORY_CONFIG`.
//! Every field is optional and defaults are applied per field rather than per
//! section, so a document that only overrides Python versions still produces
//! matrices for every ecosystem.

use serde::{Deserialize, Serialize, de::Error as _};
use serde_json::Value;

use crate::error::Error;

/// Root repository configuration document.
///
/// # Examples
///
/// ```
/// use ci_matrix::parse_config;
/// use serde_json::json;
///
/// let config = parse_config(r#"{"ci":{"go":{"versions":["1.22","1.23"]}}}"#,)?;
/// let go = config.ci.and_then(|ci| ci.go,).and_then(|go| go.versions,);
/// assert_eq!(go, Some(vec![json!("1.22"), json!("1.23")]));
/// # Ok::<(), ci_matrix::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize,)]
pub struct RepositoryConfig
{
    /// Continuous integration settings.
    #[serde(default)]
    pub ci: Option<CiSection,>,
}

/// The `ci` section with per-ecosystem overrides.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize,)]
pub struct CiSection
{
    /// Go toolchain versions.
    #[serde(default)]
    pub go:       Option<VersionsSection,>,
    /// Python interpreter versions.
    #[serde(default)]
    pub python:   Option<VersionsSection,>,
    /// Rust toolchain versions.
    #[serde(default)]
    pub rust:     Option<VersionsSection,>,
    /// Frontend settings; Node versions live under `node-versions`.
    #[serde(default)]
    pub frontend: Option<FrontendSection,>,
    /// Coverage gate settings.
    #[serde(default)]
    pub coverage: Option<CoverageSection,>,
}

/// Ecosystem section listing versions under the `versions` key.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize,)]
pub struct VersionsSection
{
    /// Versions to test against, in the order they should appear. Entries
    /// are usually strings but numbers are passed through unchanged.
    #[serde(default)]
    pub versions: Option<Vec<Value,>,>,
}

/// Frontend section.
///
/// Node versions are read from `node-versions`; a plain `versions` key is
/// ignored here and the Node fallback applies.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize,)]
pub struct FrontendSection
{
    /// Node.js versions to test against.
    #[serde(default, rename = "node-versions")]
    pub node_versions: Option<Vec<Value,>,>,
}

/// Coverage gate settings.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize,)]
pub struct CoverageSection
{
    /// Minimum coverage percentage, either a JSON string or number.
    #[serde(default)]
    pub threshold: Option<Value,>,
}

impl CoverageSection
{
    /// Renders the configured threshold as the plain string emitted to the
    /// workflow outputs.
    ///
    /// Strings are returned verbatim and numbers use their JSON text, so `85`
    /// becomes `"85"` and `72.5` becomes `"72.5"`. Booleans render as `True`
    /// or `False`. No range checks are performed.
    pub fn rendered_threshold(&self,) -> Option<String,>
    {
        self.threshold.as_ref().map(|value| match value {
            Value::Bool(true,) => "True".to_owned(),
            Value::Bool(false,) => "False".to_owned(),
            other => value_text(other,),
        },)
    }
}

/// Plain text form of a configuration value.
///
/// Strings lose their quotes; everything else keeps its JSON encoding.
pub fn value_text(value: &Value,) -> String
{
    match value {
        Value::String(text,) => text.clone(),
        other => other.to_string(),
    }
}

/// Parses the repository configuration from raw JSON text.
///
/// Empty or whitespace-only input is treated as an empty document.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the text is not valid JSON, the
/// top-level value is not an object, or a field has an unexpected shape.
pub fn parse_config(contents: &str,) -> Result<RepositoryConfig, Error,>
{
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(RepositoryConfig::default(),);
    }

    let document: Value = serde_json::from_str(trimmed,)?;
    if !document.is_object() {
        let message = "repository configuration must be a JSON object";
        return Err(serde_json::Error::custom(message,).into(),);
    }

    Ok(serde_json::from_value(document,)?,)
}
