// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;

/// Format a signed term-count pair as "+N / -N" for summaries.
pub fn delta_summary(added: u64, deleted: u64) -> String {
    format!("+{added} / -{deleted}")
}
