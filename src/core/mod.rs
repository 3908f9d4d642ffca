//! Core engine: from translation documents to glyph range boundaries.
//!
//! ## Module Structure
//!
//! - `tree`: MessageNode, the tagged model of a parsed translation file
//! - `collect`: CorpusCollector and CodepointSet
//! - `compact`: range compaction into a BoundaryList
//! - `parsers`: reading translation files from disk

pub mod collect;
pub mod compact;
pub mod parsers;
pub mod tree;

pub use collect::{CodepointSet, CorpusCollector, collect_codepoints};
pub use compact::{BoundaryList, Runs, SortedCodepoints, compact};
pub use tree::MessageNode;
