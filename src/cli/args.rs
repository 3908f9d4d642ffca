//! CLI argument definitions using clap.
//!
//! ```text
//! glyphrange [OPTIONS] [DIR]
//! ```
//!
//! `DIR` is optional at the clap level so that a missing directory can be
//! reported with the usage line and exit status 1.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory containing translation files (not searched recursively)
    pub dir: Option<PathBuf>,

    /// Config file path (default: nearest .glyphrangerc.json)
    #[arg(long, env = "GLYPHRANGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Entries per output row (overrides config file)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Translation file extension without the dot (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Do not add the configured language labels
    #[arg(long)]
    pub no_labels: bool,

    /// Write a default .glyphrangerc.json to the current directory
    #[arg(long, conflicts_with = "dir")]
    pub init: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// The one-line usage string, e.g. `Usage: glyphrange [OPTIONS] [DIR]`.
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}
