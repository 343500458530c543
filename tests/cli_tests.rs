// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::{fs, process::Command};

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn ci_matrix() -> Command
{
    let mut cmd = Command::cargo_bin("ci-matrix",).expect("binary should be built",);
    cmd.env_clear();
    cmd
}

#[test]
fn generates_outputs_and_summary_from_environment()
{
    let dir = tempdir().expect("failed to create tempdir",);
    let output = dir.path().join("output",);
    let summary = dir.path().join("summary.md",);

    ci_matrix()
        .env("REPOSITORY_CONFIG", r#"{"ci":{"python":{"versions":["3.11","3.12"]}}}"#,)
        .env("INCLUDE_MACOS", "true",)
        .env("GITHUB_OUTPUT", &output,)
        .env("GITHUB_STEP_SUMMARY", &summary,)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrices generated successfully",),);

    let written = fs::read_to_string(&output,).expect("read output",);
    assert_eq!(
        written,
        concat!(
            "go-matrix={\"go-version\":[\"1.23\"],\"os\":[\"ubuntu-latest\",\"macos-latest\"]}\n",
            "python-matrix={\"python-version\":[\"3.11\",\"3.12\"],\"os\":[\"ubuntu-latest\",\"macos-latest\"]}\n",
            "rust-matrix={\"rust-version\":[\"1.75\"],\"os\":[\"ubuntu-latest\",\"macos-latest\"]}\n",
            "frontend-matrix={\"node-version\":[\"22\"],\"os\":[\"ubuntu-latest\",\"macos-latest\"]}\n",
            "coverage-threshold=80\n",
        )
    );

    let summary_text = fs::read_to_string(&summary,).expect("read summary",);
    assert!(summary_text.contains("- **Operating systems:** ubuntu-latest, macos-latest\n"));
}

#[test]
fn malformed_config_fails_without_output()
{
    let dir = tempdir().expect("failed to create tempdir",);
    let output = dir.path().join("output",);
    let summary = dir.path().join("summary.md",);

    ci_matrix()
        .env("REPOSITORY_CONFIG", "{invalid",)
        .env("GITHUB_OUTPUT", &output,)
        .env("GITHUB_STEP_SUMMARY", &summary,)
        .assert()
        .failure()
        .code(1,)
        .stdout(predicate::str::is_empty(),)
        .stderr(predicate::str::contains("failed to parse repository configuration",),);

    assert!(!output.exists());
    assert!(!summary.exists());
}

#[test]
fn missing_sinks_are_skipped()
{
    ci_matrix()
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrices generated successfully",),);
}

#[test]
fn fallback_environment_overrides_defaults()
{
    let dir = tempdir().expect("failed to create tempdir",);
    let output = dir.path().join("output",);

    ci_matrix()
        .env("FALLBACK_NODE_VERSION", "20",)
        .env("FALLBACK_COVERAGE_THRESHOLD", "65",)
        .env("INCLUDE_LINUX", "false",)
        .env("INCLUDE_WINDOWS", "True",)
        .env("GITHUB_OUTPUT", &output,)
        .assert()
        .success();

    let written = fs::read_to_string(&output,).expect("read output",);
    assert!(written.contains("frontend-matrix={\"node-version\":[\"20\"],\"os\":[\"windows-latest\"]}\n"));
    assert!(written.ends_with("coverage-threshold=65\n"));
}

#[test]
fn show_prints_plan_without_touching_sinks()
{
    let dir = tempdir().expect("failed to create tempdir",);
    let output = dir.path().join("output",);

    ci_matrix()
        .env("REPOSITORY_CONFIG", r#"{"ci":{"coverage":{"threshold":90}}}"#,)
        .env("GITHUB_OUTPUT", &output,)
        .arg("show",)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"coverage-threshold\":\"90\"",),);

    assert!(!output.exists());
}

#[test]
fn empty_environment_values_are_kept_not_defaulted()
{
    let dir = tempdir().expect("failed to create tempdir",);
    let output = dir.path().join("output",);

    ci_matrix()
        .env("INCLUDE_LINUX", "",)
        .env("FALLBACK_GO_VERSION", "",)
        .env("GITHUB_OUTPUT", &output,)
        .assert()
        .success();

    let written = fs::read_to_string(&output,).expect("read output",);
    assert!(written.starts_with("go-matrix={\"go-version\":[\"\"],\"os\":[]}\n"));
}

#[test]
fn numeric_versions_are_emitted_unchanged()
{
    let dir = tempdir().expect("failed to create tempdir",);
    let output = dir.path().join("output",);
    let summary = dir.path().join("summary.md",);

    ci_matrix()
        .env("REPOSITORY_CONFIG", r#"{"ci":{"go":{"versions":[1.22,1.23]}}}"#,)
        .env("GITHUB_OUTPUT", &output,)
        .env("GITHUB_STEP_SUMMARY", &summary,)
        .assert()
        .success();

    let written = fs::read_to_string(&output,).expect("read output",);
    assert_eq!(written.lines().count(), 5);
    assert!(written.starts_with("go-matrix={\"go-version\":[1.22,1.23],\"os\":[\"ubuntu-latest\"]}\n"));

    let summary_text = fs::read_to_string(&summary,).expect("read summary",);
    assert!(summary_text.contains("- **Go versions:** 1.22, 1.23\n"));
}
