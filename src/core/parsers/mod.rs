//! Translation file parsers.

pub mod json;

pub use json::{
    MessageDocument, MessageScanWarning, ScanMessagesResult, ScanOptions, parse_json_file,
    parse_json_str, scan_message_files, scan_message_files_with,
};
