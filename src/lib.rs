pub mod common;
pub mod chunking;
pub mod meta;

// Export the operations so the binary and tests can call them
pub use crate::chunking::{
    join_chunks, join_chunks_at, split_file, split_file_into, FileHasher, JoinOutcome,
    SplitOutcome, Verification,
};
pub use crate::common::{Error, Result};
pub use crate::meta::MetaRecord;
