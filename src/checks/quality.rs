//! Comment-ratio and file-size quality heuristic.
//!
//! A deliberately simple, explainable proxy: start at 100 and subtract
//! fixed penalties for low comment density and very large modules.

use std::path::Path;

/// Score returned when the file cannot be read.
pub const FALLBACK_SCORE: u32 = 50;

/// Penalty for a comment ratio below [`MIN_COMMENT_RATIO`].
const LOW_COMMENT_PENALTY: i64 = 20;
/// Penalty for more than [`MAX_CODE_LINES`] code lines.
const LARGE_FILE_PENALTY: i64 = 15;

const MIN_COMMENT_RATIO: f64 = 0.1;
const MAX_CODE_LINES: usize = 500;

/// Score a file's quality, returning the score and any suggestions.
///
/// Read failures degrade to [`FALLBACK_SCORE`] with no suggestion.
pub fn check_quality(path: &Path) -> (u32, Vec<String>) {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match std::fs::read_to_string(path) {
        Ok(source) => score_quality(&file_name, &source),
        Err(_) => (FALLBACK_SCORE, Vec::new()),
    }
}

/// Pure scoring over source text.
///
/// The comment-ratio penalty is skipped for empty files (no division
/// by zero); the size penalty applies regardless.
pub fn score_quality(file_name: &str, source: &str) -> (u32, Vec<String>) {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();
    let comment_lines = lines
        .iter()
        .filter(|line| line.trim_start().starts_with('#'))
        .count();
    let code_lines = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .count();

    let mut score: i64 = 100;
    let mut suggestions = Vec::new();

    if total_lines > 0 {
        let comment_ratio = comment_lines as f64 / total_lines as f64;
        if comment_ratio < MIN_COMMENT_RATIO {
            score -= LOW_COMMENT_PENALTY;
            suggestions.push(format!("Add more comments to {}", file_name));
        }
    }

    if code_lines > MAX_CODE_LINES {
        score -= LARGE_FILE_PENALTY;
        suggestions.push(format!(
            "Consider splitting {} into smaller modules",
            file_name
        ));
    }

    (score.clamp(0, 100) as u32, suggestions)
}
