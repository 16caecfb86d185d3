// Word counting — turns the token stream for one category into a
// deduplicated word → count table.
//
// Pure and deterministic: the same token sequence always produces the
// same table, and counting a category never touches any other category,
// so independent invocations can run concurrently with no coordination.

use std::collections::BTreeMap;

use tracing::debug;

/// How tokens are normalized before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Count tokens exactly as they appear (default)
    #[default]
    None,
    /// Fold tokens to lowercase, so "Pet" and "pet" count as one term
    Lowercase,
}

/// Counts occurrences of identifier words in one vocabulary category.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCounter {
    pub normalization: Normalization,
}

impl WordCounter {
    pub fn new(normalization: Normalization) -> Self {
        Self { normalization }
    }

    /// Count the tokens of one category into a word → count table.
    ///
    /// Duplicates accumulate, empty tokens are discarded, and an empty
    /// input yields an empty table rather than an error. Counts start at 1
    /// and only increment, so zero-count entries cannot exist.
    pub fn count<I, T>(&self, tokens: I) -> BTreeMap<String, u32>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut table: BTreeMap<String, u32> = BTreeMap::new();
        let mut discarded = 0usize;

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                discarded += 1;
                continue;
            }
            let word = match self.normalization {
                Normalization::None => token.to_string(),
                Normalization::Lowercase => token.to_lowercase(),
            };
            *table.entry(word).or_insert(0) += 1;
        }

        if discarded > 0 {
            debug!(discarded, "Discarded empty tokens while counting");
        }

        table
    }
}
