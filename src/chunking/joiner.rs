// Join operation: concatenate chunks and verify the rebuilt file

use crate::chunking::hasher::FileHasher;
use crate::common::error::{Error, Result};
use crate::common::types::{META_SUFFIX, REBUILT_PREFIX};
use crate::meta::MetaRecord;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Integrity status of a rebuilt file. A mismatch is a reported result,
/// not an error: the output file is kept on disk for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified,
    SizeMismatch { expected: u64, actual: u64 },
    HashMismatch { expected: String, actual: String },
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verification::Verified)
    }
}

/// Result of a join: where the rebuilt file landed and how verification went.
#[derive(Debug)]
pub struct JoinOutcome {
    pub output: PathBuf,
    pub record: MetaRecord,
    pub verification: Verification,
}

/// Rebuild the original file from the chunk set in `dir`, writing the
/// output into the current working directory.
pub fn join_chunks(dir: &Path) -> Result<JoinOutcome> {
    join_chunks_at(dir, Path::new("."))
}

/// Rebuild the original file from the chunk set in `dir`, writing the
/// output into `out_dir`.
///
/// Requires exactly one `.meta` file in `dir`. All chunks are checked for
/// existence before any output is written. If a file with the original name
/// already exists in `out_dir`, the output is diverted to `rebuilt_<name>`
/// and the existing file is left untouched.
pub fn join_chunks_at(dir: &Path, out_dir: &Path) -> Result<JoinOutcome> {
    if !dir.is_dir() {
        return Err(Error::DirNotFound(dir.display().to_string()));
    }

    let record = read_meta(dir)?;
    log::info!(
        "rebuilding {} from {} chunks in {}",
        record.original_name,
        record.num_chunks,
        dir.display()
    );

    // Preflight: every chunk must exist before any output is written
    let mut missing = Vec::new();
    for i in 0..record.num_chunks {
        let chunk_path = dir.join(record.chunk_file_name(i));
        if !chunk_path.is_file() {
            missing.push(chunk_path.display().to_string());
        }
    }
    if !missing.is_empty() {
        return Err(Error::MissingChunks(missing));
    }

    let output = pick_output_path(out_dir, &record.original_name);

    {
        let mut out = File::create(&output)?;
        for i in 0..record.num_chunks {
            let chunk_name = record.chunk_file_name(i);
            let mut chunk_file = File::open(dir.join(&chunk_name))?;
            io::copy(&mut chunk_file, &mut out)?;
            log::info!("merged {}", chunk_name);
        }
    }

    let rebuilt_size = fs::metadata(&output)?.len();
    if rebuilt_size != record.original_size {
        log::warn!(
            "size mismatch: expected {} bytes, got {}",
            record.original_size,
            rebuilt_size
        );
        let verification = Verification::SizeMismatch {
            expected: record.original_size,
            actual: rebuilt_size,
        };
        return Ok(JoinOutcome { output, record, verification });
    }

    let rebuilt_hash = FileHasher::digest(&output)?;
    let verification = if rebuilt_hash == record.sha256 {
        Verification::Verified
    } else {
        log::warn!(
            "hash mismatch: expected {}, got {}",
            record.sha256,
            rebuilt_hash
        );
        Verification::HashMismatch {
            expected: record.sha256.clone(),
            actual: rebuilt_hash,
        }
    };

    Ok(JoinOutcome { output, record, verification })
}

/// Find the single metadata file in `dir` and decode it. Zero meta files is
/// an error; so is more than one, since "first in listing order" would be
/// platform-dependent.
fn read_meta(dir: &Path) -> Result<MetaRecord> {
    let mut meta_names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if name.ends_with(META_SUFFIX) {
                meta_names.push(name.to_string());
            }
        }
    }

    match meta_names.len() {
        0 => Err(Error::MetaNotFound(dir.display().to_string())),
        1 => {
            let text = fs::read_to_string(dir.join(&meta_names[0]))?;
            MetaRecord::decode(&text)
        }
        _ => {
            meta_names.sort();
            Err(Error::MultipleMeta {
                dir: dir.display().to_string(),
                found: meta_names,
            })
        }
    }
}

fn pick_output_path(out_dir: &Path, original_name: &str) -> PathBuf {
    let preferred = out_dir.join(original_name);
    if preferred.exists() {
        let diverted = out_dir.join(format!("{}{}", REBUILT_PREFIX, original_name));
        log::warn!(
            "output {} already exists, using {}",
            preferred.display(),
            diverted.display()
        );
        diverted
    } else {
        preferred
    }
}
