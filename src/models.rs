//! Data models for the repository analyzer.
//!
//! This module contains the core data structures used throughout
//! the application for per-file results, aggregate metrics, and
//! the persisted report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the per-file syntax check.
///
/// The check never fails past its boundary: an unreadable or
/// unparseable file becomes a failed check with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxCheck {
    /// Whether the file parsed cleanly.
    pub passed: bool,
    /// Diagnostic message ("Syntax OK" on success).
    pub message: String,
}

impl SyntaxCheck {
    /// Creates a passing check result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            message: "Syntax OK".to_string(),
        }
    }

    /// Creates a failing check result with a diagnostic.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Per-file analysis record. Printed during the run, not persisted.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    /// Path relative to the analysis root.
    pub path: String,
    /// Syntax check result.
    pub syntax: SyntaxCheck,
    /// Quality heuristic score (0-100).
    pub quality_score: u32,
    /// Import-timing performance score (0-100).
    pub performance_score: u32,
}

/// Aggregate metrics accumulated across one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of individual checks performed (3 per file, +1 for a test-suite run).
    pub tests_run: u64,
    /// Number of checks that passed.
    pub tests_passed: u64,
    /// Number of checks that failed.
    pub tests_failed: u64,
    /// Average per-file quality score (0-100).
    pub code_quality_score: f64,
    /// Average per-file performance score (0-100).
    pub performance_score: f64,
}

/// Discrete rating derived from the overall score.
///
/// Thresholds are inclusive at the lower bound and evaluated
/// from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Rating {
    /// Maps an overall score to its rating.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Rating::Excellent
        } else if score >= 75.0 {
            Rating::Good
        } else if score >= 60.0 {
            Rating::Fair
        } else {
            Rating::NeedsImprovement
        }
    }

    /// Returns a star string for console display.
    pub fn stars(&self) -> &'static str {
        match self {
            Rating::Excellent => "⭐⭐⭐⭐⭐",
            Rating::Good => "⭐⭐⭐⭐",
            Rating::Fair => "⭐⭐⭐",
            Rating::NeedsImprovement => "⭐⭐",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// The persisted analysis report. Overwritten wholesale on each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run timestamp, RFC 3339.
    pub timestamp: String,
    /// Aggregate metrics snapshot.
    pub metrics: Metrics,
    /// Mean of the averaged quality and performance scores.
    pub overall_score: f64,
    /// Deduplicated per-file suggestions followed by repository-wide ones.
    pub suggestions: Vec<String>,
}
