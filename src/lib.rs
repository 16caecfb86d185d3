// Lexidrift: vocabulary drift analysis for API description corpora.
//
// This is the library root. Each module corresponds to a stage of the
// drift pipeline: counting identifier words into per-category tables,
// assembling snapshots, diffing snapshots into version deltas, and
// rendering the resulting history.

pub mod codec;
pub mod history;
pub mod output;
pub mod vocabulary;
