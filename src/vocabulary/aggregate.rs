// Snapshot aggregation — collects the vocabularies produced by a corpus
// scan into an ordered VocabularyList.
//
// Counting different documents has no data dependency, so a scanner may
// fan work out across threads. The aggregator is the single coordination
// point: when snapshots arrive out of order, callers record them keyed by
// source-document index and the finished list comes out in index order,
// not completion order.

use tracing::debug;

use super::model::{Vocabulary, VocabularyList};

/// Collects vocabulary snapshots into a caller-ordered list.
#[derive(Debug, Default)]
pub struct VocabularyAggregator {
    slots: Vec<(usize, Vocabulary)>,
}

impl VocabularyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot in arrival order. Equivalent to `record` with the
    /// next sequential index; suitable for single-threaded scans.
    pub fn push(&mut self, vocabulary: Vocabulary) {
        let index = self.slots.len();
        self.slots.push((index, vocabulary));
    }

    /// Record a snapshot under its source-document index. Indices need not
    /// arrive in order; duplicates are kept and ordered stably among
    /// themselves (first recorded, first listed).
    pub fn record(&mut self, index: usize, vocabulary: Vocabulary) {
        self.slots.push((index, vocabulary));
    }

    /// Number of snapshots collected so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Produce the final list, ordered by source index.
    pub fn finish(mut self) -> VocabularyList {
        self.slots.sort_by_key(|(index, _)| *index);
        debug!(count = self.slots.len(), "Assembled vocabulary list");
        VocabularyList {
            vocabularies: self.slots.into_iter().map(|(_, v)| v).collect(),
            extra: serde_json::Map::new(),
        }
    }
}
