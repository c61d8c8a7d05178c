//! CLI parse: clap types for folio. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio CLI - Static asset index generation
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Generate static asset index modules for bundler-loaded image folders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Asset root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable all logging output
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the asset root and write the index module
    Generate {
        /// Render and report without writing the index file
        #[arg(long)]
        dry_run: bool,
        /// Sort folders and entries lexicographically
        #[arg(long)]
        sort: bool,
        /// Output format for the summary (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Verify the index module matches the current directory tree
    Check {
        /// Sort folders and entries lexicographically
        #[arg(long)]
        sort: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Watch the asset root and regenerate the index on change
    Watch {
        /// Debounce window in milliseconds
        #[arg(long, default_value = "200")]
        debounce_ms: u64,
        /// Sort folders and entries lexicographically
        #[arg(long)]
        sort: bool,
    },
}
