//! Pure formatting functions for UI output.
//!
//! `format_*` functions build plain text and are what the tests check;
//! `display_*` functions add styling and print.

use console::style;

use crate::cli::{CheckReport, Verdict};

/// Plain-text verdict line.
///
/// Example: `Compiled-in version 1.2.0 is compatible with runtime version 1.3.0 (renderer)`
pub fn format_verdict(verdict: &Verdict) -> String {
    let prefix = if verdict.compatible { "" } else { "in" };
    let mut line = format!(
        "Compiled-in version {} is {}compatible with runtime version {}",
        verdict.declared, prefix, verdict.runtime
    );
    if let Some(label) = &verdict.label {
        line.push_str(&format!(" ({})", label));
    }
    line
}

/// One-line summary of a whole report.
pub fn format_summary(report: &CheckReport) -> String {
    let failed = report.verdicts.iter().filter(|v| !v.compatible).count();
    if failed == 0 {
        format!("All {} checks compatible", report.verdicts.len())
    } else {
        format!(
            "{} of {} checks incompatible",
            failed,
            report.verdicts.len()
        )
    }
}

/// Print a verdict with a green check or red cross.
pub fn display_verdict(verdict: &Verdict) {
    let mark = if verdict.compatible {
        style("✓").green()
    } else {
        style("✗").red()
    };
    println!("{} {}", mark, format_verdict(verdict));
}

/// Print every verdict, then the summary when there is more than one.
pub fn display_report(report: &CheckReport) {
    for verdict in &report.verdicts {
        display_verdict(verdict);
    }

    if report.verdicts.len() > 1 {
        println!("\n{}", style(format_summary(report)).bold());
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}
