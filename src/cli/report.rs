//! Rendering a tolerance report for the console

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fmt::Write;

use crate::cli::args::OutputFormat;
use crate::core::{Axis, ToleranceReport};

/// Render the report in the requested format
pub fn render(report: &ToleranceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).into_diagnostic(),
    }
}

/// Human-readable report: inputs at 2 decimals, tolerances at 3
pub fn render_text(report: &ToleranceReport) -> String {
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style("3D Print Tolerance Report:").bold());
    for axis in Axis::ALL {
        let _ = writeln!(out, "Ideal {axis} dimension (mm): {:.2}", report.expected.get(axis));
    }
    for axis in Axis::ALL {
        let _ = writeln!(out, "Measured {axis} dimension (mm): {:.2}", report.measured.get(axis));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style("Tolerance Results:").bold());
    for result in &report.results {
        let _ = writeln!(
            out,
            "{}-axis: Signed = {}%, Absolute = {:.3}%",
            result.axis,
            format_signed(result.signed_percent),
            result.absolute_percent
        );
    }

    out
}

/// Format a percentage to 3 decimals, prefixing `+` when strictly positive
pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.3}")
    } else {
        format!("{value:.3}")
    }
}
