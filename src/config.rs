use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::parsers::ScanOptions;

pub const CONFIG_FILE_NAME: &str = ".glyphrangerc.json";

/// Language names shown by the language picker. Their glyphs must be in
/// the generated ranges even when no translation file uses them.
///
/// "Nederlands" and "Français" are a single entry; the list is kept as it
/// is shipped to the renderer.
pub const DEFAULT_LABELS: &[&str] = &[
    "English",
    "NederlandsFrançais",
    "Italiano",
    "Deutsch",
    "Español",
    "Português",
    "简体中文",
    "繁體中文",
    "日本語",
    "琉球諸語",
    "한국어",
];

/// Entries per output row.
pub const DEFAULT_COLUMNS: usize = 16;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            extension: default_extension(),
            ignores: Vec::new(),
            columns: default_columns(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, a zero
    /// `columns`, or an `extension` that is empty or contains a dot.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.columns == 0 {
            bail!("'columns' must be at least 1");
        }

        if self.extension.is_empty() || self.extension.contains('.') {
            bail!(
                "Invalid 'extension': \"{}\" (expected a bare extension such as \"json\")",
                self.extension
            );
        }

        Ok(())
    }

    /// Build the file scan options. Call after [`Config::validate`].
    pub fn scan_options(&self) -> Result<ScanOptions> {
        let ignores = self
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanOptions {
            extension: self.extension.clone(),
            ignores,
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_from_path(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
