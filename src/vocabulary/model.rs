// Data models — the entity types that flow through the drift pipeline.
//
// These are plain immutable value types, separate from the algorithms that
// produce them, so the differ and the output layer can share them without
// depending on each other. Word-count collections are explicit mappings
// (word → count) with unique keys; BTreeMap keeps emission order fixed
// (lexicographic) so repeated runs produce byte-identical encodings.
//
// Every type carries an `extra` overflow map: fields we don't recognize
// during decode survive an unmodified re-encode, so newer producers can
// add fields without older consumers destroying them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a word-frequency table: a distinct word and how many times
/// it was observed. Zero-count entries are never materialized — counting
/// only increments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

/// A vocabulary snapshot: every distinct identifier word observed in one
/// API description, partitioned into four independent categories.
///
/// Snapshots are produced once per corpus scan and immutable thereafter.
/// A missing category on decode means "no terms observed" and becomes an
/// empty map, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub schemas: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub operations: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, u32>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

impl Vocabulary {
    /// Assemble a snapshot from four already-deduplicated category tables.
    ///
    /// The tables are stored unchanged — uniqueness of keys is guaranteed
    /// by the mapping type, and the name may be empty (delta tables inside
    /// a Version have no name of their own).
    pub fn new(
        name: impl Into<String>,
        schemas: BTreeMap<String, u32>,
        properties: BTreeMap<String, u32>,
        operations: BTreeMap<String, u32>,
        parameters: BTreeMap<String, u32>,
    ) -> Self {
        Self {
            name: name.into(),
            schemas,
            properties,
            operations,
            parameters,
            extra: Map::new(),
        }
    }

    /// Number of distinct terms across all four categories.
    pub fn term_count(&self) -> usize {
        self.schemas.len() + self.properties.len() + self.operations.len() + self.parameters.len()
    }

    /// Sum of occurrence counts across all four categories.
    /// This is the quantity a Version records for its delta tables.
    /// Accumulates in u64: per-term counts are u32, but a large corpus
    /// can push the sum past u32 range.
    pub fn total_count(&self) -> u64 {
        [
            &self.schemas,
            &self.properties,
            &self.operations,
            &self.parameters,
        ]
        .iter()
        .flat_map(|table| table.values())
        .map(|&count| u64::from(count))
        .sum()
    }

    /// True when no category holds any terms.
    pub fn is_empty(&self) -> bool {
        self.term_count() == 0
    }

    /// True when the value carries nothing at all on the wire: no name,
    /// no terms, and no unknown fields. Only such a value may be omitted
    /// from an encoding without losing information — a term-less delta
    /// can still be carrying unknown fields that must survive re-encode.
    pub fn is_wire_empty(&self) -> bool {
        self.name.is_empty() && self.is_empty() && self.extra.is_empty()
    }

    /// The four category tables with their display labels, in fixed order.
    /// Used by the differ and the output layer so they iterate identically.
    pub fn categories(&self) -> [(&'static str, &BTreeMap<String, u32>); 4] {
        [
            ("schemas", &self.schemas),
            ("properties", &self.properties),
            ("operations", &self.operations),
            ("parameters", &self.parameters),
        ]
    }
}

/// An ordered collection of vocabulary snapshots from one corpus scan.
/// Order is caller-defined (typically scan order) and never reordered here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vocabularies: Vec<Vocabulary>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

/// The delta between two successive snapshots of one named entity.
///
/// `new_terms` holds terms present in the new snapshot but not the old,
/// with the counts observed in the new snapshot; `deleted_terms` is the
/// mirror image with counts from the old snapshot. The scalar counts are
/// sums over the respective delta tables. Terms present in both snapshots
/// are not represented here regardless of count changes — the delta model
/// deliberately tracks presence, not frequency drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub new_term_count: u64,
    #[serde(default, skip_serializing_if = "Vocabulary::is_wire_empty")]
    pub new_terms: Vocabulary,
    #[serde(default)]
    pub deleted_term_count: u64,
    #[serde(default, skip_serializing_if = "Vocabulary::is_wire_empty")]
    pub deleted_terms: Vocabulary,
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

impl Version {
    /// True when nothing was added or removed between the two snapshots.
    pub fn is_unchanged(&self) -> bool {
        self.new_term_count == 0 && self.deleted_term_count == 0
    }
}

/// The chronological sequence of deltas recorded for one named entity.
/// Append-only: versions are never reordered or deduplicated, and repeated
/// names are permitted (the model does not police caller labels).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionHistory {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<Version>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}
