// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Markdown step summary describing a generated plan.

use crate::{config::value_text, matrix::MatrixPlan, platform::OperatingSystem};

/// Heading written at the top of the step summary.
pub const SUMMARY_HEADER: &str = "## 🔧 Generated CI Matrices";

/// Renders the step summary as individual lines.
///
/// # Examples
///
/// ```
/// use ci_matrix::{Settings, generate_plan, parse_config, render_summary};
///
/// let plan = generate_plan(&parse_config("{}",)?, &Settings::default(),);
/// let lines = render_summary(&plan,);
/// assert_eq!(lines[1], "- **Go versions:** 1.23");
/// assert_eq!(lines[6], "- **Coverage threshold:** 80%");
/// # Ok::<(), ci_matrix::Error>(())
/// ```
pub fn render_summary(plan: &MatrixPlan,) -> Vec<String,>
{
    let mut lines = Vec::with_capacity(plan.matrices.len() + 3,);
    lines.push(SUMMARY_HEADER.to_owned(),);

    for matrix in &plan.matrices {
        let versions: Vec<_,> = matrix.versions.iter().map(value_text,).collect();
        lines.push(format!("- **{} versions:** {}", matrix.ecosystem.label(), versions.join(", ")),);
    }

    let operating_systems: Vec<_,> =
        plan.operating_systems.iter().copied().map(OperatingSystem::runner_label,).collect();
    lines.push(format!("- **Operating systems:** {}", operating_systems.join(", ")),);
    lines.push(format!("- **Coverage threshold:** {}%", plan.coverage_threshold),);

    lines
}
