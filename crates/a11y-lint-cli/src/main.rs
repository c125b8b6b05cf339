//! a11y-lint CLI tool.
//!
//! Usage:
//! ```bash
//! a11y-lint check [OPTIONS] [PATH]
//! a11y-lint list-rules
//! a11y-lint init
//! ```

use a11y_lint_rules::Preset;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Accessibility checker for HTML documents
#[derive(Parser)]
#[command(name = "a11y-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit an HTML document
    Check {
        /// HTML file to audit, or "-" for stdin
        #[arg(default_value = "-")]
        path: PathBuf,

        /// URL recorded in the report (default: the input path)
        #[arg(long)]
        url: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Rule preset (overrides the config file)
        #[arg(long)]
        preset: Option<Preset>,

        /// Only run specific rules (comma-separated ids)
        #[arg(long)]
        rules: Option<String>,

        /// Exit non-zero for violations at or above this impact
        #[arg(long)]
        fail_on: Option<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for audit reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON report.
    Json,
    /// One line per finding.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            url,
            format,
            preset,
            rules,
            fail_on,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::check::run(
                &commands::check::CheckOptions {
                    path,
                    url,
                    format,
                    preset,
                    rules,
                    fail_on,
                },
                &source,
            )
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
