//! Orchestration for a single invocation.
//!
//! Loads configuration, scans the messages directory, collects the
//! characters in use and compacts them into a [`BoundaryList`]. Printing is
//! left to [`super::report`] so the pipeline can be driven from tests.

use std::{env, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use crate::config::{Config, load_config, load_config_from_path};
use crate::core::{
    BoundaryList, CorpusCollector, compact,
    parsers::{MessageScanWarning, scan_message_files_with},
};

/// Everything the report needs about one run.
#[derive(Debug)]
pub struct RunResult {
    pub boundaries: BoundaryList,
    pub columns: usize,
    pub codepoint_count: usize,
    pub files_read: usize,
    pub warnings: Vec<MessageScanWarning>,
}

/// Resolve the configuration for `args`: explicit `--config`, else the
/// nearest config file above the working directory, then CLI overrides.
pub fn resolve_config(args: &Arguments) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            load_config(&cwd)?.config
        }
    };

    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(extension) = &args.extension {
        config.extension = extension.clone();
    }
    if args.no_labels {
        config.labels.clear();
    }

    config.validate()?;
    Ok(config)
}

pub fn run(dir: &Path, config: &Config, verbose: bool) -> Result<RunResult> {
    let options = config.scan_options()?;

    let scan = scan_message_files_with(dir, &options, |path| {
        if verbose {
            eprintln!("{} {}", "Reading".cyan(), path.display());
        }
    })?;

    let mut collector = CorpusCollector::new(&config.labels);
    for document in &scan.documents {
        collector.add_tree(&document.root);
    }
    let codepoints = collector.finish();
    let codepoint_count = codepoints.len();

    Ok(RunResult {
        boundaries: compact(codepoints),
        columns: config.columns,
        codepoint_count,
        files_read: scan.documents.len(),
        warnings: scan.warnings,
    })
}
