// Split operation: fixed-size sequential chunks plus a metadata record

use crate::chunking::hasher::FileHasher;
use crate::common::error::{Error, Result};
use crate::common::types::{CHUNK_DIR_SUFFIX, META_SUFFIX};
use crate::meta::{chunk_file_name, index_width, MetaRecord};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Result of a split: where the chunk set landed and what it contains.
#[derive(Debug)]
pub struct SplitOutcome {
    pub dir: PathBuf,
    pub record: MetaRecord,
}

/// Split `source` into chunks of at most `chunk_size` bytes, in a
/// `<base_name>_chunks/` directory under the current working directory.
pub fn split_file(source: &Path, chunk_size: u64) -> Result<SplitOutcome> {
    split_file_into(source, chunk_size, Path::new("."))
}

/// Split `source` into chunks of at most `chunk_size` bytes, creating the
/// chunk directory under `parent`.
///
/// The source is read twice: once to hash it, once to chunk it. Re-running
/// over an existing chunk directory overwrites same-named files. A mid-stream
/// I/O failure leaves a partially populated directory behind; callers must
/// treat partial output as unusable.
pub fn split_file_into(source: &Path, chunk_size: u64, parent: &Path) -> Result<SplitOutcome> {
    if !source.is_file() {
        return Err(Error::FileNotFound(source.display().to_string()));
    }
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }

    let base_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Format(format!("invalid source file name: {}", source.display())))?
        .to_string();

    let file_size = fs::metadata(source)?.len();

    let dir = parent.join(format!("{}{}", base_name, CHUNK_DIR_SUFFIX));
    fs::create_dir_all(&dir)?;

    log::info!(
        "splitting {} ({} bytes) into {} with chunk size {}",
        source.display(),
        file_size,
        dir.display(),
        chunk_size
    );

    let digest = FileHasher::digest(source)?;
    log::info!("source sha256: {}", digest);

    // ceil(file_size / chunk_size); the index width depends on the final
    // chunk count, so it is fixed up front.
    let expected_chunks = (file_size + chunk_size - 1) / chunk_size;
    let width = index_width(expected_chunks);

    let mut file = File::open(source)?;
    let mut buffer = vec![0u8; chunk_size as usize];
    let mut chunk_num: u64 = 0;

    loop {
        // Fill up to one whole chunk; a short read is not EOF yet
        let mut read_total = 0usize;
        while read_total < buffer.len() {
            let n = file.read(&mut buffer[read_total..])?;
            if n == 0 {
                break;
            }
            read_total += n;
        }
        if read_total == 0 {
            break;
        }

        let chunk_name = chunk_file_name(&base_name, chunk_num, width);
        let chunk_path = dir.join(&chunk_name);
        let mut chunk_file = File::create(&chunk_path)?;
        chunk_file.write_all(&buffer[..read_total])?;

        log::info!("created {} ({} bytes)", chunk_path.display(), read_total);
        chunk_num += 1;
    }

    let record = MetaRecord {
        original_name: base_name.clone(),
        num_chunks: chunk_num,
        original_size: file_size,
        chunk_size,
        sha256: digest,
    };

    let meta_path = dir.join(format!("{}{}", base_name, META_SUFFIX));
    fs::write(&meta_path, record.encode())?;
    log::info!("wrote metadata {} ({} chunks)", meta_path.display(), chunk_num);

    Ok(SplitOutcome { dir, record })
}
