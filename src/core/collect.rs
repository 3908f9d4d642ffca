use std::collections::{HashSet, hash_set};

use super::compact::SortedCodepoints;
use super::tree::MessageNode;

/// Set of distinct Unicode scalar values seen in a corpus.
///
/// Values are stored as `u32` so the set can be fed straight into
/// [`SortedCodepoints`]. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodepointSet(HashSet<u32>);

impl CodepointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        self.0.insert(u32::from(c))
    }

    /// Add every character of `text`.
    pub fn insert_str(&mut self, text: &str) {
        self.0.extend(text.chars().map(u32::from));
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.0.contains(&codepoint)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, u32> {
        self.0.iter()
    }

    pub fn into_sorted(self) -> SortedCodepoints {
        SortedCodepoints::from_iter(self.0)
    }
}

impl FromIterator<char> for CodepointSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().map(u32::from).collect())
    }
}

impl Extend<char> for CodepointSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(u32::from));
    }
}

impl<'a> IntoIterator for &'a CodepointSet {
    type Item = &'a u32;
    type IntoIter = hash_set::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Accumulates the characters used by a set of translation documents.
///
/// The auxiliary labels are passed in explicitly and only added by
/// [`CorpusCollector::finish`], so callers always see which extra strings
/// end up in the set.
///
/// # Example
///
/// ```
/// use glyphrange::core::{CorpusCollector, MessageNode};
///
/// let labels = vec!["a".to_string()];
/// let mut collector = CorpusCollector::new(&labels);
/// collector.add_tree(&MessageNode::String("ab".to_string()));
/// collector.add_tree(&MessageNode::String("bc".to_string()));
/// let set = collector.finish();
///
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Debug)]
pub struct CorpusCollector<'a> {
    labels: &'a [String],
    codepoints: CodepointSet,
}

impl<'a> CorpusCollector<'a> {
    pub fn new(labels: &'a [String]) -> Self {
        Self {
            labels,
            codepoints: CodepointSet::new(),
        }
    }

    /// Add every character of every string leaf in `tree`.
    pub fn add_tree(&mut self, tree: &MessageNode) {
        let codepoints = &mut self.codepoints;
        tree.for_each_string(&mut |s| codepoints.insert_str(s));
    }

    pub fn add_str(&mut self, text: &str) {
        self.codepoints.insert_str(text);
    }

    /// Characters collected so far, labels excluded.
    pub fn codepoints(&self) -> &CodepointSet {
        &self.codepoints
    }

    /// Add the labels and hand over the finished set.
    pub fn finish(mut self) -> CodepointSet {
        for label in self.labels {
            self.codepoints.insert_str(label);
        }
        self.codepoints
    }
}

/// Collect the codepoints of all `trees` plus `labels` in one call.
pub fn collect_codepoints<'t>(
    trees: impl IntoIterator<Item = &'t MessageNode>,
    labels: &[String],
) -> CodepointSet {
    let mut collector = CorpusCollector::new(labels);
    for tree in trees {
        collector.add_tree(tree);
    }
    collector.finish()
}
