//! Shared output formatting for audit reports.

use a11y_lint_core::{Impact, Report};
use anyhow::Result;
use std::fmt::Write;

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Compact => print!("{}", render_compact(report)),
    }
    Ok(())
}

fn impact_indicator(impact: Impact) -> &'static str {
    match impact {
        Impact::Critical => "\x1b[35mcritical\x1b[0m",
        Impact::Serious => "\x1b[31mserious\x1b[0m",
        Impact::Moderate => "\x1b[33mmoderate\x1b[0m",
        Impact::Minor => "\x1b[34mminor\x1b[0m",
    }
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let (critical, serious, moderate, minor) = report.count_by_impact();

    for violation in &report.violations {
        let _ = writeln!(
            out,
            "{} [{}] {}",
            impact_indicator(violation.impact),
            violation.id,
            violation.help
        );
        for node in &violation.nodes {
            let _ = writeln!(out, "  --> {}", node.target.join(", "));
            let _ = writeln!(out, "      {}", node.html);
            let _ = writeln!(out, "      {}", node.failure_summary);
        }
        let hidden = violation.total_nodes() - violation.nodes.len();
        if hidden > 0 {
            let _ = writeln!(out, "  ... and {hidden} more");
        }
        let _ = writeln!(out, "  = help: {}", violation.help_url);
        out.push('\n');
    }

    let summary_color = if critical + serious > 0 {
        "\x1b[31m"
    } else if moderate + minor > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let _ = writeln!(
        out,
        "{summary_color}{}: {critical} critical, {serious} serious, {moderate} moderate, {minor} minor; {} rule(s) passed\x1b[0m",
        report.url,
        report.passes.len(),
    );
    out
}

fn render_compact(report: &Report) -> String {
    let mut out = String::new();
    for violation in &report.violations {
        for node in &violation.nodes {
            let _ = writeln!(
                out,
                "{}: {} [{}] {}: {}",
                report.url,
                violation.impact,
                violation.id,
                node.target.join(", "),
                node.failure_summary,
            );
        }
    }
    out
}
