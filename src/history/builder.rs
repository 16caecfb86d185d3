// Chronological assembly of a VersionHistory.
//
// The history is append-only: versions go in at the end, in the order the
// caller recorded them, with no reordering and no deduplication of names.
// `observe` covers the common scan loop — hand it each snapshot as the
// corpus produces them and it diffs against the previous one for you.

use tracing::debug;

use crate::vocabulary::model::{Version, VersionHistory, Vocabulary};

use super::differ;

/// Builds the version history of one named entity, one delta at a time.
#[derive(Debug, Default)]
pub struct VersionHistoryBuilder {
    name: String,
    versions: Vec<Version>,
    last_snapshot: Option<Vocabulary>,
}

impl VersionHistoryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
            last_snapshot: None,
        }
    }

    /// Append a precomputed delta at the end of the history.
    pub fn append(&mut self, version: Version) -> &mut Self {
        self.versions.push(version);
        self
    }

    /// Record the next snapshot in chronological order.
    ///
    /// The first snapshot only establishes the baseline; every later one
    /// is diffed against the most recently recorded snapshot and the
    /// resulting delta appended under the snapshot's own name.
    pub fn observe(&mut self, snapshot: Vocabulary) -> &mut Self {
        if let Some(previous) = &self.last_snapshot {
            let version = differ::diff(snapshot.name.clone(), previous, &snapshot);
            debug!(
                version = %version.name,
                added = version.new_term_count,
                deleted = version.deleted_term_count,
                "Recorded version delta"
            );
            self.versions.push(version);
        }
        self.last_snapshot = Some(snapshot);
        self
    }

    /// Number of deltas recorded so far.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Produce the finished history.
    pub fn finish(self) -> VersionHistory {
        VersionHistory {
            name: self.name,
            versions: self.versions,
            extra: serde_json::Map::new(),
        }
    }
}

/// Assemble a history directly from an already-ordered delta sequence.
pub fn build(name: impl Into<String>, versions: Vec<Version>) -> VersionHistory {
    VersionHistory {
        name: name.into(),
        versions,
        extra: serde_json::Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn snapshot(name: &str, schemas: &[(&str, u32)]) -> Vocabulary {
        Vocabulary {
            name: name.to_string(),
            schemas: schemas
                .iter()
                .map(|(w, c)| (w.to_string(), *c))
                .collect::<BTreeMap<String, u32>>(),
            ..Default::default()
        }
    }

    fn delta(name: &str) -> Version {
        Version {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut builder = VersionHistoryBuilder::new("petstore");
        builder.append(delta("v1"));
        builder.append(delta("v2"));
        builder.append(delta("v3"));
        let history = builder.finish();

        assert_eq!(history.name, "petstore");
        assert_eq!(history.versions.len(), 3);
        let names: Vec<&str> = history.versions.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["v1", "v2", "v3"]);
    }

    #[test]
    fn test_duplicate_version_names_kept() {
        let mut builder = VersionHistoryBuilder::new("petstore");
        builder.append(delta("v1"));
        builder.append(delta("v1"));
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_observe_first_snapshot_is_baseline_only() {
        let mut builder = VersionHistoryBuilder::new("petstore");
        builder.observe(snapshot("v1", &[("pet", 3)]));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_observe_diffs_against_previous_snapshot() {
        let mut builder = VersionHistoryBuilder::new("petstore");
        builder.observe(snapshot("v1", &[("pet", 3)]));
        builder.observe(snapshot("v2", &[("pet", 3), ("order", 1)]));
        builder.observe(snapshot("v3", &[("order", 1)]));
        let history = builder.finish();

        assert_eq!(history.versions.len(), 2);

        let v2 = &history.versions[0];
        assert_eq!(v2.name, "v2");
        assert_eq!(v2.new_term_count, 1);
        assert_eq!(v2.deleted_term_count, 0);

        // v3 dropped "pet"; the delta carries the count from v2
        let v3 = &history.versions[1];
        assert_eq!(v3.name, "v3");
        assert_eq!(v3.new_term_count, 0);
        assert_eq!(v3.deleted_terms.schemas["pet"], 3);
    }

    #[test]
    fn test_build_from_ordered_deltas() {
        let history = build("petstore", vec![delta("v1"), delta("v2")]);
        assert_eq!(history.versions.len(), 2);
        assert_eq!(history.versions[0].name, "v1");
    }
}
