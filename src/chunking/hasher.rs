// Streaming whole-file hash computation

use crate::common::error::Result;
use crate::common::types::HASH_READ_BUF;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Hasher for whole-file digests
pub struct FileHasher;

impl FileHasher {
    /// Compute the SHA-256 digest of the file at `path`, reading in
    /// bounded-size blocks so arbitrarily large files fit in memory.
    /// Returns the lowercase hex encoding of the digest.
    pub fn digest(path: &Path) -> Result<String> {
        let mut file = File::open(path)?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; HASH_READ_BUF];

        loop {
            let bytes_read = file.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hex::encode(hasher.finalize()))
    }
}
