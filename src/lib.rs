//! Glyphrange - glyph range tables from translation files
//!
//! Glyphrange scans a directory of JSON translation files, collects every
//! character their string values use (plus a configured list of language
//! labels) and prints the minimal list of contiguous codepoint ranges as a
//! table of `(start, end)` hex pairs, ready to be used as a font subsetting
//! table by a UI renderer.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Character collection and range compaction

pub mod cli;
pub mod config;
pub mod core;
