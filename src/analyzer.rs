//! Sequential analysis workflow.
//!
//! One run walks the stages in order: discover files, run the three
//! per-file checks, optionally run pytest, aggregate, print, persist.
//! Per-file checks degrade to fallback scores on their own, so the loop
//! always completes for every discovered file.

use crate::analysis::{average, finalize_suggestions, overall_score, RepoFacts};
use crate::checks::testsuite::{run_test_suite, TestOutcome};
use crate::checks::{probe, quality, syntax};
use crate::config::Config;
use crate::exec::{CommandRunner, RealCommandRunner};
use crate::models::{FileAnalysis, Metrics, Report};
use crate::report;
use crate::scanner::{FileScanner, ScanConfig};
use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Number of per-file checks contributing to `tests_run`.
const CHECKS_PER_FILE: u64 = 3;

/// Orchestrates one analysis run over a repository root.
pub struct Analyzer {
    root: PathBuf,
    config: Config,
    runner: Box<dyn CommandRunner>,
    metrics: Metrics,
    suggestions: Vec<String>,
}

impl Analyzer {
    /// Create an analyzer with the real command runner.
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self::with_runner(root, config, Box::new(RealCommandRunner::new()))
    }

    /// Create an analyzer with an explicit command runner (the seam for tests).
    pub fn with_runner(root: PathBuf, config: Config, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            root,
            config,
            runner,
            metrics: Metrics::default(),
            suggestions: Vec::new(),
        }
    }

    /// Execute the full analysis and persist the report.
    pub async fn run(&mut self) -> Result<Report> {
        println!("🔎 PyCheckup Analysis");
        println!("   Repository: {}", self.root.display());
        println!(
            "   Started at: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        let scan_config = ScanConfig::from(&self.config.scanner);
        let files = FileScanner::new(self.root.clone(), scan_config).scan()?;
        println!("\n   Found {} Python files to analyze\n", files.len());

        let mut total_quality: u64 = 0;
        let mut total_performance: u64 = 0;
        let mut analyses = Vec::with_capacity(files.len());

        for file in &files {
            let analysis = self.analyze_file(file).await;
            total_quality += u64::from(analysis.quality_score);
            total_performance += u64::from(analysis.performance_score);
            analyses.push(analysis);
        }

        for failed in analyses.iter().filter(|a| !a.syntax.passed) {
            debug!("Syntax failure in {}: {}", failed.path, failed.syntax.message);
        }

        self.run_test_stage().await;

        self.metrics.code_quality_score = average(total_quality, files.len());
        self.metrics.performance_score = average(total_performance, files.len());
        let overall = overall_score(
            self.metrics.code_quality_score,
            self.metrics.performance_score,
        );

        let facts = RepoFacts::collect(&self.root);
        let suggestions = finalize_suggestions(
            &self.suggestions,
            &facts,
            self.metrics.code_quality_score,
            self.metrics.performance_score,
        );

        let final_report = Report {
            timestamp: Local::now().to_rfc3339(),
            metrics: self.metrics.clone(),
            overall_score: overall,
            suggestions,
        };

        report::print_summary(&final_report);
        let report_path = report::save_report(&self.root, &final_report)?;
        println!("\n💾 Detailed report saved to: {}", report_path.display());

        Ok(final_report)
    }

    /// Run the three checks for one file, updating metrics and suggestions.
    async fn analyze_file(&mut self, path: &Path) -> FileAnalysis {
        let display_path = self.relative_display(path);
        println!("📄 Analyzing: {}", display_path);

        let syntax = syntax::check_syntax(path);
        if syntax.passed {
            println!("   ✓ Syntax check passed");
            self.metrics.tests_passed += 1;
        } else {
            println!("   ✗ Syntax check failed: {}", syntax.message);
            self.metrics.tests_failed += 1;
        }

        let (quality_score, quality_suggestions) = quality::check_quality(path);
        self.suggestions.extend(quality_suggestions);
        println!("   ✓ Code quality score: {}/100", quality_score);

        let (performance_score, perf_suggestion) = probe::check_import_time(
            self.runner.as_ref(),
            &self.config.probe.python,
            path,
            Duration::from_secs(self.config.probe.import_timeout_secs),
        )
        .await;
        self.suggestions.extend(perf_suggestion);
        println!("   ✓ Performance score: {}/100\n", performance_score);

        self.metrics.tests_run += CHECKS_PER_FILE;

        FileAnalysis {
            path: display_path,
            syntax,
            quality_score,
            performance_score,
        }
    }

    /// Run the optional pytest stage, counting it as one extra check
    /// only when a test directory was actually found and invoked.
    async fn run_test_stage(&mut self) {
        if self.config.general.skip_tests {
            println!("⏭  Test suite skipped");
            return;
        }

        println!("🧪 Running unit tests...");
        let outcome = run_test_suite(
            self.runner.as_ref(),
            &self.config.probe.python,
            &self.root,
            Duration::from_secs(self.config.probe.test_timeout_secs),
        )
        .await;

        match outcome {
            TestOutcome::NotFound(msg) => {
                info!("{}", msg);
                println!("   ⚠ No tests found");
            }
            TestOutcome::Passed(output) => {
                debug!("pytest output:\n{}", output);
                println!("   ✓ All unit tests passed");
                self.metrics.tests_run += 1;
                self.metrics.tests_passed += 1;
            }
            TestOutcome::Failed(output) => {
                debug!("pytest output:\n{}", output);
                println!("   ✗ Some unit tests failed");
                self.metrics.tests_run += 1;
                self.metrics.tests_failed += 1;
            }
        }
    }

    fn relative_display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

/// Scan and list the files one run would analyze, without checking them.
pub fn dry_run(root: &Path, config: &Config) -> Result<()> {
    let scan_config = ScanConfig::from(&config.scanner);
    let files = FileScanner::new(root.to_path_buf(), scan_config).scan()?;

    if files.is_empty() {
        println!("   No Python files found.");
    } else {
        println!("   Found {} files that would be analyzed:\n", files.len());
        for file in &files {
            let rel = file.strip_prefix(root).unwrap_or(file);
            println!("     📄 {}", rel.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::mock::MockCommandRunner;
    use std::fs;
    use tempfile::TempDir;

    fn analyzer_for(dir: &TempDir) -> Analyzer {
        Analyzer::with_runner(
            dir.path().to_path_buf(),
            Config::default(),
            Box::new(MockCommandRunner::new()),
        )
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    // 12 lines, 2 comments: no quality penalties.
    const CLEAN_SOURCE: &str = "# module docs\n# more docs\na = 1\nb = 2\nc = 3\nd = 4\ne = 5\nf = 6\ng = 7\nh = 8\ni = 9\nj = 10\n";

    #[tokio::test]
    async fn test_empty_repository() {
        let dir = tempfile::tempdir().unwrap();
        let mut analyzer = analyzer_for(&dir);

        let report = analyzer.run().await.unwrap();

        assert_eq!(report.metrics.tests_run, 0);
        assert_eq!(report.metrics.code_quality_score, 0.0);
        assert_eq!(report.metrics.performance_score, 0.0);
        assert_eq!(report.overall_score, 0.0);
        // Repo-wide suggestions still appended.
        assert!(report
            .suggestions
            .contains(&"Create a tests directory with unit tests".to_string()));
        assert!(report
            .suggestions
            .contains(&"Add requirements.txt for dependency management".to_string()));
        assert!(report
            .suggestions
            .contains(&"Add comprehensive README.md documentation".to_string()));
        // Averages of 0 trip both score nudges too.
        assert!(report
            .suggestions
            .contains(&"Optimize slow-loading modules".to_string()));
        assert!(dir.path().join(report::REPORT_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_tests_run_arithmetic_without_suite() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "a.py", CLEAN_SOURCE);
        write_file(&dir, "b.py", CLEAN_SOURCE);

        let mut analyzer = analyzer_for(&dir);
        let report = analyzer.run().await.unwrap();

        // 3 checks per file, no test directory, so no extra check.
        assert_eq!(report.metrics.tests_run, 6);
        assert_eq!(report.metrics.tests_passed, 2);
        assert_eq!(report.metrics.tests_failed, 0);
    }

    #[tokio::test]
    async fn test_tests_run_counts_suite_when_found() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "a.py", CLEAN_SOURCE);
        fs::create_dir(dir.path().join("tests")).unwrap();

        let runner = MockCommandRunner::new();
        // First call is the import probe, second the pytest run.
        runner.push_ok(true, "");
        runner.push_ok(true, "1 passed");

        let mut analyzer = Analyzer::with_runner(
            dir.path().to_path_buf(),
            Config::default(),
            Box::new(runner),
        );
        let report = analyzer.run().await.unwrap();

        assert_eq!(report.metrics.tests_run, 4);
        assert_eq!(report.metrics.tests_passed, 2);
    }

    #[tokio::test]
    async fn test_failing_suite_counts_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "a.py", CLEAN_SOURCE);
        fs::create_dir(dir.path().join("tests")).unwrap();

        let runner = MockCommandRunner::new();
        runner.push_ok(true, "");
        runner.push_ok(false, "1 failed");

        let mut analyzer = Analyzer::with_runner(
            dir.path().to_path_buf(),
            Config::default(),
            Box::new(runner),
        );
        let report = analyzer.run().await.unwrap();

        assert_eq!(report.metrics.tests_run, 4);
        assert_eq!(report.metrics.tests_failed, 1);
    }

    #[tokio::test]
    async fn test_skip_tests_leaves_counters_alone() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "a.py", CLEAN_SOURCE);
        fs::create_dir(dir.path().join("tests")).unwrap();

        let mut config = Config::default();
        config.general.skip_tests = true;

        let mut analyzer = Analyzer::with_runner(
            dir.path().to_path_buf(),
            config,
            Box::new(MockCommandRunner::new()),
        );
        let report = analyzer.run().await.unwrap();

        assert_eq!(report.metrics.tests_run, 3);
    }

    #[tokio::test]
    async fn test_syntax_failure_does_not_abort_loop() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "bad.py", "def broken(:\n    pass\n");
        write_file(&dir, "good.py", CLEAN_SOURCE);

        let mut analyzer = analyzer_for(&dir);
        let report = analyzer.run().await.unwrap();

        assert_eq!(report.metrics.tests_run, 6);
        assert_eq!(report.metrics.tests_passed, 1);
        assert_eq!(report.metrics.tests_failed, 1);
    }

    #[tokio::test]
    async fn test_duplicate_suggestions_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        // Two files with the same name in different directories produce
        // identical suggestion strings; set semantics keeps one.
        write_file(&dir, "pkg_a/util.py", "a = 1\n".repeat(20).as_str());
        write_file(&dir, "pkg_b/util.py", "a = 1\n".repeat(20).as_str());

        let mut analyzer = analyzer_for(&dir);
        let report = analyzer.run().await.unwrap();

        let matching: Vec<_> = report
            .suggestions
            .iter()
            .filter(|s| *s == "Add more comments to util.py")
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[tokio::test]
    async fn test_scores_stay_in_range() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "bare.py", &"x = 1\n".repeat(600));
        write_file(&dir, "clean.py", CLEAN_SOURCE);

        let mut analyzer = analyzer_for(&dir);
        let report = analyzer.run().await.unwrap();

        for score in [
            report.metrics.code_quality_score,
            report.metrics.performance_score,
            report.overall_score,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[tokio::test]
    async fn test_report_written_to_root() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir, "a.py", CLEAN_SOURCE);

        let mut analyzer = analyzer_for(&dir);
        let report = analyzer.run().await.unwrap();

        let content =
            fs::read_to_string(dir.path().join(report::REPORT_FILE_NAME)).unwrap();
        let loaded: Report = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.metrics, report.metrics);
        assert_eq!(loaded.overall_score, report.overall_score);
    }
}
