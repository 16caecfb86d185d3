// Version history — diffing snapshots into deltas and assembling them
// into a chronological record.

pub mod builder;
pub mod differ;
