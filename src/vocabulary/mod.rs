// Vocabulary snapshots — the census of identifier words in one API
// description, partitioned into four categories.

pub mod aggregate;
pub mod counter;
pub mod model;
