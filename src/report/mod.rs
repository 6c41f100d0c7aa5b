//! Report persistence and console summary.

use crate::models::{Rating, Report};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fixed report file name, relative to the analysis root.
pub const REPORT_FILE_NAME: &str = "ai_test_report.json";

/// Write the report as indented JSON, overwriting any prior report.
///
/// Write failures propagate; they fail the whole run.
pub fn save_report(root: &Path, report: &Report) -> Result<PathBuf> {
    let path = root.join(REPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path)
}

/// Print the human-readable summary to stdout.
pub fn print_summary(report: &Report) {
    let rating = Rating::from_score(report.overall_score);

    println!("\n📊 Analysis Report");
    println!("\n   Tests Summary:");
    println!("     Total checks run: {}", report.metrics.tests_run);
    println!("     Passed: {}", report.metrics.tests_passed);
    println!("     Failed: {}", report.metrics.tests_failed);

    println!("\n   Quality Metrics:");
    println!(
        "     Code Quality Score: {:.1}/100",
        report.metrics.code_quality_score
    );
    println!(
        "     Performance Score: {:.1}/100",
        report.metrics.performance_score
    );
    println!("     Overall Score: {:.1}/100", report.overall_score);
    println!("     Rating: {} {}", rating, rating.stars());

    if !report.suggestions.is_empty() {
        println!(
            "\n💡 Improvement Suggestions ({}):",
            report.suggestions.len()
        );
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            println!("   {}. {}", i + 1, suggestion);
        }
    }
}
