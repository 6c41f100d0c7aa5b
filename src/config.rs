//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.pycheckup.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Subprocess probe settings.
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,

    /// Skip the pytest stage.
    #[serde(default)]
    pub skip_tests: bool,
}

/// File scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Path substrings to exclude from discovery.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            excludes: default_excludes(),
        }
    }
}

fn default_excludes() -> Vec<String> {
    vec!["venv", ".venv", "__pycache__"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Settings for the external interpreter invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Python interpreter to invoke.
    #[serde(default = "default_python")]
    pub python: String,

    /// Timeout for one import probe, in seconds.
    #[serde(default = "default_import_timeout")]
    pub import_timeout_secs: u64,

    /// Timeout for the pytest run, in seconds.
    #[serde(default = "default_test_timeout")]
    pub test_timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            import_timeout_secs: default_import_timeout(),
            test_timeout_secs: default_test_timeout(),
        }
    }
}

fn default_python() -> String {
    "python".to_string()
}

fn default_import_timeout() -> u64 {
    5
}

fn default_test_timeout() -> u64 {
    60
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".pycheckup.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; optional
    /// arguments only override when explicitly provided.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref python) = args.python {
            self.probe.python = python.clone();
        }

        if args.skip_tests {
            self.general.skip_tests = true;
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.probe.python, "python");
        assert_eq!(config.probe.import_timeout_secs, 5);
        assert_eq!(config.probe.test_timeout_secs, 60);
        assert!(config.scanner.excludes.contains(&"venv".to_string()));
        assert!(!config.general.skip_tests);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true
skip_tests = true

[scanner]
excludes = [".tox", "__pycache__"]

[probe]
python = "python3"
import_timeout_secs = 10
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert!(config.general.skip_tests);
        assert_eq!(config.scanner.excludes, vec![".tox", "__pycache__"]);
        assert_eq!(config.probe.python, "python3");
        assert_eq!(config.probe.import_timeout_secs, 10);
        // Unspecified fields keep their defaults.
        assert_eq!(config.probe.test_timeout_secs, 60);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[scanner]"));
        assert!(toml_str.contains("[probe]"));
    }
}
