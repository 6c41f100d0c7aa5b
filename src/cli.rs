//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// PyCheckup - repository health analyzer for Python codebases
///
/// Walks a code tree, runs cheap per-file checks (syntax, comment/size
/// heuristic, import timing), optionally runs pytest, and writes a JSON
/// report with a numeric score and improvement suggestions.
///
/// Examples:
///   pycheckup
///   pycheckup path/to/repo --skip-tests
///   pycheckup --dry-run
///   pycheckup --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Root directory to analyze
    #[arg(value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    ///
    /// If not specified, looks for .pycheckup.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Python interpreter to use for probes and pytest
    #[arg(long, value_name = "BIN", env = "PYCHECKUP_PYTHON")]
    pub python: Option<String>,

    /// Skip the pytest stage
    #[arg(long)]
    pub skip_tests: bool,

    /// Scan and list files without analyzing them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .pycheckup.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if !self.root.exists() {
            return Err(format!(
                "Root directory does not exist: {}",
                self.root.display()
            ));
        }
        if !self.root.is_dir() {
            return Err(format!(
                "Root path is not a directory: {}",
                self.root.display()
            ));
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref python) = self.python {
            if python.trim().is_empty() {
                return Err("Python interpreter name must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
