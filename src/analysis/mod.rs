//! Score aggregation and suggestion finalization.

use crate::checks::testsuite::find_test_dir;
use std::collections::BTreeSet;
use std::path::Path;

/// Average of accumulated per-file scores; 0 when no files were found.
pub fn average(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Overall score: mean of the averaged quality and performance scores.
pub fn overall_score(quality: f64, performance: f64) -> f64 {
    (quality + performance) / 2.0
}

/// Repository-level facts driving the fixed suggestion checks.
#[derive(Debug, Clone, Default)]
pub struct RepoFacts {
    pub has_test_dir: bool,
    pub has_requirements: bool,
    pub has_readme: bool,
}

impl RepoFacts {
    /// Collect facts from the analysis root.
    ///
    /// "Has tests" means a conventional test directory exists, the same
    /// definition the test-suite stage uses.
    pub fn collect(root: &Path) -> Self {
        Self {
            has_test_dir: find_test_dir(root).is_some(),
            has_requirements: root.join("requirements.txt").is_file(),
            has_readme: root.join("README.md").is_file(),
        }
    }
}

/// Deduplicate per-file suggestions, then append repository-wide ones.
///
/// Per-file suggestions are deduplicated with set semantics; the output
/// order is sorted, which is deterministic but not contractual.
/// Repository-wide suggestions follow in a fixed order and are never
/// deduplicated against the per-file ones.
pub fn finalize_suggestions(
    per_file: &[String],
    facts: &RepoFacts,
    quality_avg: f64,
    performance_avg: f64,
) -> Vec<String> {
    let deduped: BTreeSet<&String> = per_file.iter().collect();
    let mut suggestions: Vec<String> = deduped.into_iter().cloned().collect();

    if !facts.has_test_dir {
        suggestions.push("Create a tests directory with unit tests".to_string());
    }
    if !facts.has_requirements {
        suggestions.push("Add requirements.txt for dependency management".to_string());
    }
    if !facts.has_readme {
        suggestions.push("Add comprehensive README.md documentation".to_string());
    }

    if performance_avg < 70.0 {
        suggestions.push("Optimize slow-loading modules".to_string());
    }

    if quality_avg < 75.0 {
        suggestions.push("Improve code documentation and structure".to_string());
        suggestions.push("Consider using linting tools (pylint, flake8)".to_string());
    }

    suggestions
}
