//! PyCheckup - repository health analyzer for Python codebases
//!
//! A CLI tool that discovers Python files, runs per-file syntax,
//! quality, and import-timing checks, optionally runs pytest, and
//! writes a JSON report with scores and improvement suggestions.
//!
//! Exit codes:
//!   0 - Analysis completed and report written
//!   1 - Runtime error or interrupt

mod analysis;
mod analyzer;
mod checks;
mod cli;
mod config;
mod exec;
mod models;
mod report;
mod scanner;

use analyzer::Analyzer;
use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("PyCheckup v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // An interrupt exits nonzero without writing a partial report.
    let result = tokio::select! {
        res = run_analysis(args) => res,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n\nAnalysis interrupted by user");
            std::process::exit(1);
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .pycheckup.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".pycheckup.toml");

    if path.exists() {
        eprintln!("⚠️  .pycheckup.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .pycheckup.toml")?;

    println!("✅ Created .pycheckup.toml with default settings.");
    println!("   Edit it to customize excludes, interpreter, and timeouts.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete analysis workflow.
async fn run_analysis(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("Failed to resolve root: {}", args.root.display()))?;

    if args.dry_run {
        println!("🔍 Dry run: scanning files only...\n");
        analyzer::dry_run(&root, &config)?;
        println!("\n✅ Dry run complete. No checks were run.");
        return Ok(());
    }

    let mut analyzer = Analyzer::new(root, config);
    analyzer.run().await?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .pycheckup.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
