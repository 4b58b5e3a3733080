// Common constants shared by the split and join paths
pub const DEFAULT_CHUNK_SIZE_MB: u64 = 50;
pub const BYTES_PER_MB: u64 = 1024 * 1024;
pub const HASH_READ_BUF: usize = 64 * 1024; // 64KB
pub const CHUNK_DIR_SUFFIX: &str = "_chunks";
pub const META_SUFFIX: &str = ".meta";
pub const PART_MARKER: &str = ".part";
pub const REBUILT_PREFIX: &str = "rebuilt_";
pub const MIN_INDEX_WIDTH: usize = 3;
