use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde_json::Value;

use crate::core::MessageNode;

/// A warning from scanning message files.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

/// One successfully parsed translation file.
#[derive(Debug, Clone)]
pub struct MessageDocument {
    pub file_path: String,
    pub root: MessageNode,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub documents: Vec<MessageDocument>,
    pub warnings: Vec<MessageScanWarning>,
}

impl ScanMessagesResult {
    /// Number of files that matched the scan, parsed or not.
    pub fn files_seen(&self) -> usize {
        self.documents.len() + self.warnings.len()
    }
}

/// Which files in the messages directory are read.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extension without the leading dot (e.g. "json").
    pub extension: String,
    /// File names matching any of these are skipped.
    pub ignores: Vec<Pattern>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            ignores: Vec::new(),
        }
    }
}

impl ScanOptions {
    fn accepts(&self, path: &Path) -> bool {
        if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
            return false;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        // Hidden files, including our own config, are never translations.
        if name.starts_with('.') {
            return false;
        }
        !self.ignores.iter().any(|pattern| pattern.matches(name))
    }
}

/// Parse a translation document. The root must be a JSON object.
pub fn parse_json_str(content: &str) -> Result<MessageNode> {
    let json: Value = serde_json::from_str(content)?;
    if !json.is_object() {
        bail!("Expected a JSON object at the root, found {}", json_kind(&json));
    }
    Ok(MessageNode::from(json))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    }
}

pub fn parse_json_file(path: &Path) -> Result<MessageNode> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    parse_json_str(&content).with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

/// List the files in `message_dir` (not its subdirectories) that `options` accepts,
/// sorted by path so output does not depend on directory order.
pub fn list_message_files(message_dir: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(message_dir)
        .with_context(|| format!("Failed to read directory: {:?}", message_dir))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_file() && options.accepts(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

pub fn scan_message_files(
    message_dir: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<ScanMessagesResult> {
    scan_message_files_with(message_dir, options, |_| {})
}

/// Like [`scan_message_files`], calling `on_file` before each file is read.
pub fn scan_message_files_with(
    message_dir: impl AsRef<Path>,
    options: &ScanOptions,
    mut on_file: impl FnMut(&Path),
) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    for path in list_message_files(message_dir, options)? {
        on_file(&path);
        let file_path = path.to_string_lossy().to_string();
        match parse_json_file(&path) {
            Ok(root) => {
                result.documents.push(MessageDocument { file_path, root });
            }
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
