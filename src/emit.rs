// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! End-to-end generation: parse, compute, then emit.
//!
//! Every fallible computation happens before the first sink write, so a
//! malformed configuration leaves both sinks untouched.

use tracing::info;

use crate::{
    config::parse_config,
    error::Error,
    matrix::{MatrixPlan, generate_plan},
    settings::Settings,
    sink::{OutputSink, Sink},
    summary::render_summary,
};

/// Line printed to stdout after a successful run.
pub const SUCCESS_MESSAGE: &str = "✅ Matrices generated successfully";

/// Parses the configuration held by `settings` and builds the plan without
/// writing anything.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) for malformed configuration.
pub fn plan_from_settings(settings: &Settings,) -> Result<MatrixPlan, Error,>
{
    let config = parse_config(&settings.repository_config,)?;
    Ok(generate_plan(&config, settings,),)
}

/// Writes the plan's outputs and step summary.
///
/// Outputs are fully encoded before the first line is appended.
///
/// # Errors
///
/// Returns [`Error::Serialize`](Error::Serialize) when a matrix cannot be
/// encoded and [`Error::Sink`](Error::Sink) when a sink cannot be written.
pub fn emit_plan(plan: &MatrixPlan, outputs: &OutputSink, summary: &Sink,) -> Result<(), Error,>
{
    let encoded = plan.outputs()?;
    for (name, value,) in &encoded {
        outputs.write(name, value,)?;
    }

    let lines = render_summary(plan,);
    for line in &lines {
        summary.append_line(line,)?;
    }

    info!("Emitted {} outputs and {} summary lines", encoded.len(), lines.len());
    Ok((),)
}

/// Runs the generator against the sinks named in `settings`.
///
/// # Errors
///
/// Propagates parse, serialization and sink errors. On a parse error nothing
/// is written.
pub fn run(settings: &Settings,) -> Result<MatrixPlan, Error,>
{
    let plan = plan_from_settings(settings,)?;

    let output_path = settings.output_path();
    if output_path.is_none() {
        info!("GITHUB_OUTPUT is not set, skipping workflow outputs");
    }
    let outputs = OutputSink::new(Sink::new(output_path,),);
    let summary = Sink::new(settings.summary_path(),);
    if summary.path().is_none() {
        info!("GITHUB_STEP_SUMMARY is not set, skipping step summary");
    }

    emit_plan(&plan, &outputs, &summary,)?;
    Ok(plan,)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::run;
    use crate::{Error, Settings};

    #[test]
    fn run_writes_outputs_and_summary()
    {
        let dir = tempdir().expect("failed to create tempdir",);
        let output = dir.path().join("output",);
        let summary = dir.path().join("summary.md",);

        let settings = Settings {
            repository_config: r#"{"ci":{"python":{"versions":["3.11","3.12"]}}}"#.to_owned(),
            include_macos: "true".to_owned(),
            github_output: Some(output.display().to_string(),),
            github_step_summary: Some(summary.display().to_string(),),
            ..Settings::default()
        };

        run(&settings,).expect("run failed",);

        let written = fs::read_to_string(&output,).expect("read output",);
        let lines: Vec<_,> = written.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"go-matrix={"go-version":["1.23"],"os":["ubuntu-latest","macos-latest"]}"#,
                r#"python-matrix={"python-version":["3.11","3.12"],"os":["ubuntu-latest","macos-latest"]}"#,
                r#"rust-matrix={"rust-version":["1.75"],"os":["ubuntu-latest","macos-latest"]}"#,
                r#"frontend-matrix={"node-version":["22"],"os":["ubuntu-latest","macos-latest"]}"#,
                "coverage-threshold=80",
            ]
        );

        let summary_text = fs::read_to_string(&summary,).expect("read summary",);
        assert!(summary_text.starts_with("## 🔧 Generated CI Matrices\n"));
        assert!(summary_text.contains("- **Python versions:** 3.11, 3.12\n"));
        assert!(summary_text.ends_with("- **Coverage threshold:** 80%\n"));
    }

    #[test]
    fn run_appends_to_existing_output()
    {
        let dir = tempdir().expect("failed to create tempdir",);
        let output = dir.path().join("output",);
        fs::write(&output, "previous=1\n",).expect("seed output",);

        let settings = Settings {
            github_output: Some(output.display().to_string(),),
            ..Settings::default()
        };
        run(&settings,).expect("run failed",);

        let written = fs::read_to_string(&output,).expect("read output",);
        assert!(written.starts_with("previous=1\n"));
        assert_eq!(written.lines().count(), 6);
    }

    #[test]
    fn malformed_config_writes_nothing()
    {
        let dir = tempdir().expect("failed to create tempdir",);
        let output = dir.path().join("output",);
        let summary = dir.path().join("summary.md",);

        let settings = Settings {
            repository_config: "{invalid".to_owned(),
            github_output: Some(output.display().to_string(),),
            github_step_summary: Some(summary.display().to_string(),),
            ..Settings::default()
        };

        let error = run(&settings,).expect_err("expected parse failure",);
        assert!(matches!(error, Error::Parse { .. }));
        assert!(!output.exists());
        assert!(!summary.exists());
    }

    #[test]
    fn run_without_sinks_still_succeeds()
    {
        let plan = run(&Settings::default(),).expect("run failed",);
        assert_eq!(plan.matrices.len(), 4);
    }
}
