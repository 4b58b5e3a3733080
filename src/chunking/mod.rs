pub mod hasher;
pub mod splitter;
pub mod joiner;

pub use hasher::FileHasher;
pub use splitter::{split_file, split_file_into, SplitOutcome};
pub use joiner::{join_chunks, join_chunks_at, JoinOutcome, Verification};
