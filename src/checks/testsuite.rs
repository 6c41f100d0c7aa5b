//! Optional pytest execution against a conventional test directory.

use crate::exec::CommandRunner;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Conventional test directory names, in priority order.
pub const TEST_DIR_CANDIDATES: [&str; 2] = ["tests", "test"];

/// Three-way outcome of the test-suite stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// No test directory exists under the root.
    NotFound(String),
    /// pytest ran and reported success; carries captured output.
    Passed(String),
    /// pytest reported failure, or the invocation errored or timed out.
    Failed(String),
}

/// Find the first conventional test directory under the root.
///
/// Only the first match is ever tried; an existing but empty `tests`
/// directory does not fall through to `test`.
pub fn find_test_dir(root: &Path) -> Option<PathBuf> {
    TEST_DIR_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_dir())
}

/// Run pytest against the first matching test directory, if any.
pub async fn run_test_suite(
    runner: &dyn CommandRunner,
    python: &str,
    root: &Path,
    timeout: Duration,
) -> TestOutcome {
    let test_dir = match find_test_dir(root) {
        Some(dir) => dir,
        None => return TestOutcome::NotFound("No test directory found".to_string()),
    };

    let args = vec![
        "-m".to_string(),
        "pytest".to_string(),
        test_dir.to_string_lossy().into_owned(),
        "-v".to_string(),
    ];

    match runner.run(python, &args, root, timeout).await {
        Ok(output) if output.success => TestOutcome::Passed(output.stdout),
        Ok(output) => TestOutcome::Failed(output.stdout),
        Err(e) => TestOutcome::Failed(format!("Test execution error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::mock::MockCommandRunner;
    use std::fs;

    #[tokio::test]
    async fn test_no_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mock = MockCommandRunner::new();

        let outcome =
            run_test_suite(&mock, "python", dir.path(), Duration::from_secs(60)).await;

        assert_eq!(
            outcome,
            TestOutcome::NotFound("No test directory found".to_string())
        );
    }

    #[tokio::test]
    async fn test_passing_suite() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tests")).unwrap();
        let mock = MockCommandRunner::new();
        mock.push_ok(true, "2 passed");

        let outcome =
            run_test_suite(&mock, "python", dir.path(), Duration::from_secs(60)).await;

        assert_eq!(outcome, TestOutcome::Passed("2 passed".to_string()));
    }

    #[tokio::test]
    async fn test_failing_suite() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("test")).unwrap();
        let mock = MockCommandRunner::new();
        mock.push_ok(false, "1 failed");

        let outcome =
            run_test_suite(&mock, "python", dir.path(), Duration::from_secs(60)).await;

        assert_eq!(outcome, TestOutcome::Failed("1 failed".to_string()));
    }

    #[tokio::test]
    async fn test_invocation_error_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tests")).unwrap();
        let mock = MockCommandRunner::new();
        mock.push_err("timed out");

        let outcome =
            run_test_suite(&mock, "python", dir.path(), Duration::from_secs(60)).await;

        match outcome {
            TestOutcome::Failed(msg) => assert!(msg.contains("Test execution error")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_candidate_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tests")).unwrap();
        fs::create_dir(dir.path().join("test")).unwrap();

        let found = find_test_dir(dir.path()).unwrap();
        assert!(found.ends_with("tests"));
    }
}
