//! Import-timing performance probe.
//!
//! Imports the file as an isolated module in a fresh interpreter and
//! scores the wall-clock time. Many files are not meant to be imported
//! standalone, so a failing import is a neutral result, not an error.

use crate::exec::CommandRunner;
use std::path::Path;
use std::time::{Duration, Instant};

/// Score returned when the probe cannot produce a measurement.
pub const NEUTRAL_SCORE: u32 = 75;

/// Time the import of `path` in a subprocess and score the latency.
///
/// Spawn failure, timeout, and import errors all degrade to
/// [`NEUTRAL_SCORE`] with no suggestion.
pub async fn check_import_time(
    runner: &dyn CommandRunner,
    python: &str,
    path: &Path,
    timeout: Duration,
) -> (u32, Option<String>) {
    let stem = match path.file_stem().and_then(|s| s.to_str()) {
        Some(s) => s.to_string(),
        None => return (NEUTRAL_SCORE, None),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cwd = path.parent().unwrap_or_else(|| Path::new("."));

    let args = vec!["-c".to_string(), format!("import {}", stem)];

    let start = Instant::now();
    match runner.run(python, &args, cwd, timeout).await {
        Ok(output) if output.success => {
            let elapsed = start.elapsed().as_secs_f64();
            score_from_elapsed(&file_name, elapsed)
        }
        _ => (NEUTRAL_SCORE, None),
    }
}

/// Map measured import latency to a score.
pub fn score_from_elapsed(file_name: &str, elapsed: f64) -> (u32, Option<String>) {
    if elapsed > 2.0 {
        (
            60,
            Some(format!(
                "{} has slow import time ({:.2}s)",
                file_name, elapsed
            )),
        )
    } else if elapsed > 1.0 {
        (80, None)
    } else {
        (100, None)
    }
}
