//! File scanner for discovering Python source files.
//!
//! Walks the analysis root and collects `.py` files, skipping virtual
//! environments and bytecode caches by path substring. Results are
//! sorted so a given filesystem state always scans in the same order.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Configuration for file discovery.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Path substrings to exclude (e.g., ["venv", "__pycache__"]).
    pub excludes: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excludes: vec!["venv", ".venv", "__pycache__"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            excludes: config.excludes.clone(),
        }
    }
}

/// File scanner for discovering source files under a root.
pub struct FileScanner {
    root: PathBuf,
    config: ScanConfig,
}

impl FileScanner {
    /// Create a new file scanner.
    pub fn new(root: PathBuf, config: ScanConfig) -> Self {
        Self { root, config }
    }

    /// Scan for all Python files. An empty repository yields `Ok(vec![])`.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("py") {
                continue;
            }
            if self.is_excluded(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Check a path against the exclusion substrings.
    fn is_excluded(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.config
            .excludes
            .iter()
            .any(|pattern| text.contains(pattern.as_str()))
    }
}
