// Snapshot diffing — the core delta algorithm.
//
// Compares two vocabulary snapshots of the same named entity, category by
// category, using map membership rather than pairwise comparison: a term
// is "new" when it exists in the new snapshot and not the old, "deleted"
// in the mirror case. Terms present in both snapshots are ignored even if
// their counts changed — the delta model tracks presence, not frequency.
//
// Cost is O(|old| + |new|) per category, and neither input is mutated.
// Delta tables inherit BTreeMap's lexicographic order, so repeated runs
// and textual diffs of the output are reproducible.

use std::collections::BTreeMap;

use tracing::debug;

use crate::vocabulary::model::{Version, Vocabulary};

/// Compute the delta between two snapshots of one named entity.
///
/// The counts stored in the delta tables are copied verbatim from the
/// snapshot in which the term was observed: the new snapshot for
/// additions, the old snapshot for deletions. Two empty snapshots yield
/// an all-zero Version with empty term tables.
pub fn diff(name: impl Into<String>, old: &Vocabulary, new: &Vocabulary) -> Version {
    let new_terms = Vocabulary::new(
        "",
        only_in_first(&new.schemas, &old.schemas),
        only_in_first(&new.properties, &old.properties),
        only_in_first(&new.operations, &old.operations),
        only_in_first(&new.parameters, &old.parameters),
    );
    let deleted_terms = Vocabulary::new(
        "",
        only_in_first(&old.schemas, &new.schemas),
        only_in_first(&old.properties, &new.properties),
        only_in_first(&old.operations, &new.operations),
        only_in_first(&old.parameters, &new.parameters),
    );

    let new_term_count = new_terms.total_count();
    let deleted_term_count = deleted_terms.total_count();
    let name = name.into();

    debug!(
        version = %name,
        added = new_terms.term_count(),
        deleted = deleted_terms.term_count(),
        "Computed version delta"
    );

    Version {
        name,
        new_term_count,
        new_terms,
        deleted_term_count,
        deleted_terms,
        extra: serde_json::Map::new(),
    }
}

/// Entries of `first` whose words do not appear in `second`, with the
/// counts observed in `first`.
fn only_in_first(
    first: &BTreeMap<String, u32>,
    second: &BTreeMap<String, u32>,
) -> BTreeMap<String, u32> {
    first
        .iter()
        .filter(|(word, _)| !second.contains_key(*word))
        .map(|(word, count)| (word.clone(), *count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect()
    }

    fn with_schemas(entries: &[(&str, u32)]) -> Vocabulary {
        Vocabulary {
            schemas: table(entries),
            ..Default::default()
        }
    }

    #[test]
    fn test_added_term_reported_with_new_count() {
        let old = with_schemas(&[("pet", 3)]);
        let new = with_schemas(&[("pet", 3), ("order", 1)]);
        let version = diff("petstore", &old, &new);

        assert_eq!(version.new_terms.schemas, table(&[("order", 1)]));
        assert_eq!(version.new_term_count, 1);
        assert!(version.deleted_terms.is_empty());
        assert_eq!(version.deleted_term_count, 0);
    }

    #[test]
    fn test_deleted_term_reported_with_old_count() {
        let old = with_schemas(&[("pet", 3), ("tag", 2)]);
        let new = with_schemas(&[("pet", 5)]);
        let version = diff("petstore", &old, &new);

        // "tag" disappeared, carrying the count from the old snapshot.
        // The pet count change 3 → 5 is not an add or delete event.
        assert_eq!(version.deleted_terms.schemas, table(&[("tag", 2)]));
        assert_eq!(version.deleted_term_count, 2);
        assert!(version.new_terms.is_empty());
        assert_eq!(version.new_term_count, 0);
    }

    #[test]
    fn test_persisting_term_ignored_regardless_of_count() {
        let old = with_schemas(&[("pet", 1)]);
        let new = with_schemas(&[("pet", 100)]);
        let version = diff("petstore", &old, &new);
        assert!(version.is_unchanged());
        assert!(!version.new_terms.schemas.contains_key("pet"));
        assert!(!version.deleted_terms.schemas.contains_key("pet"));
    }

    #[test]
    fn test_categories_diffed_independently() {
        let old = Vocabulary::new(
            "v1",
            table(&[("pet", 3)]),
            table(&[("id", 2)]),
            table(&[]),
            table(&[("limit", 1)]),
        );
        let new = Vocabulary::new(
            "v2",
            table(&[("pet", 3)]),
            table(&[("id", 2), ("status", 4)]),
            table(&[("listPets", 1)]),
            table(&[]),
        );
        let version = diff("petstore", &old, &new);

        assert_eq!(version.new_terms.properties, table(&[("status", 4)]));
        assert_eq!(version.new_terms.operations, table(&[("listPets", 1)]));
        assert_eq!(version.new_term_count, 5);
        assert_eq!(version.deleted_terms.parameters, table(&[("limit", 1)]));
        assert_eq!(version.deleted_term_count, 1);
        // A schema word never bleeds into another category's delta
        assert!(version.new_terms.schemas.is_empty());
    }

    #[test]
    fn test_both_empty_yields_all_zero_version() {
        let version = diff("empty", &Vocabulary::default(), &Vocabulary::default());
        assert_eq!(version.name, "empty");
        assert_eq!(version.new_term_count, 0);
        assert_eq!(version.deleted_term_count, 0);
        assert!(version.new_terms.is_empty());
        assert!(version.deleted_terms.is_empty());
    }

    #[test]
    fn test_diff_is_symmetric_under_operand_swap() {
        let a = Vocabulary::new(
            "a",
            table(&[("pet", 3), ("tag", 2)]),
            table(&[("id", 1)]),
            table(&[]),
            table(&[("limit", 9)]),
        );
        let b = Vocabulary::new(
            "b",
            table(&[("pet", 5), ("order", 1)]),
            table(&[]),
            table(&[("getPet", 2)]),
            table(&[("limit", 4)]),
        );

        let forward = diff("n", &a, &b);
        let backward = diff("n", &b, &a);
        assert_eq!(forward.new_terms, backward.deleted_terms);
        assert_eq!(forward.deleted_terms, backward.new_terms);
        assert_eq!(forward.new_term_count, backward.deleted_term_count);
        assert_eq!(forward.deleted_term_count, backward.new_term_count);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let old = with_schemas(&[("pet", 3)]);
        let new = with_schemas(&[("order", 1)]);
        let old_before = old.clone();
        let new_before = new.clone();
        let _ = diff("petstore", &old, &new);
        assert_eq!(old, old_before);
        assert_eq!(new, new_before);
    }
}
