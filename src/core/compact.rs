//! Compaction of a codepoint set into boundary pairs.
//!
//! A [`BoundaryList`] holds, in ascending order, the first and last
//! codepoint of every maximal run of consecutive codepoints. A run of one
//! codepoint contributes its value twice, so the list always reads as
//! `(start, end)` pairs. This is the layout font loaders expect for glyph
//! range tables.

use std::{ops::RangeInclusive, slice};

use super::collect::CodepointSet;

/// Strictly ascending, duplicate-free codepoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedCodepoints(Vec<u32>);

impl SortedCodepoints {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.0.binary_search(&codepoint).is_ok()
    }

    /// Walk the sorted values once and emit run boundaries.
    ///
    /// Each value is compared with its neighbours. The first and last
    /// values use themselves as the missing neighbour, which forces a
    /// boundary at both ends of the sequence.
    pub fn compact(&self) -> BoundaryList {
        let values = &self.0;
        let n = values.len();
        let mut boundaries = Vec::new();

        for (i, &cur) in values.iter().enumerate() {
            let prev = if i > 0 { values[i - 1] } else { cur };
            let next = if i + 1 < n { values[i + 1] } else { cur };

            // Opens a run: no contiguous predecessor.
            if cur.checked_sub(1) != Some(prev) {
                boundaries.push(cur);
            }
            // Closes a run: no contiguous successor.
            if cur.checked_add(1) != Some(next) {
                boundaries.push(cur);
            }
        }

        BoundaryList(boundaries)
    }
}

impl FromIterator<u32> for SortedCodepoints {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut values: Vec<u32> = iter.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self(values)
    }
}

impl From<CodepointSet> for SortedCodepoints {
    fn from(set: CodepointSet) -> Self {
        set.into_sorted()
    }
}

/// Run boundaries in ascending `(start, end)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryList(Vec<u32>);

impl BoundaryList {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of runs, i.e. half the number of boundaries.
    pub fn run_count(&self) -> usize {
        self.0.len() / 2
    }

    /// Decode the pairs back into closed intervals.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            pairs: self.0.chunks_exact(2),
        }
    }
}

impl AsRef<[u32]> for BoundaryList {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

/// Iterator over the runs of a [`BoundaryList`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    pairs: slice::ChunksExact<'a, u32>,
}

impl Iterator for Runs<'_> {
    type Item = RangeInclusive<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next().map(|pair| pair[0]..=pair[1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for Runs<'_> {}

/// Sort `set` and compact it into run boundaries.
///
/// # Examples
///
/// ```
/// use glyphrange::core::{CodepointSet, compact};
///
/// let set: CodepointSet = "ABCF".chars().collect();
/// assert_eq!(compact(set).as_slice(), &[0x41, 0x43, 0x46, 0x46]);
/// ```
pub fn compact(set: CodepointSet) -> BoundaryList {
    set.into_sorted().compact()
}
