// Metadata record for a chunk set and its on-disk text format

use crate::common::error::{Error, Result};
use crate::common::types::{MIN_INDEX_WIDTH, PART_MARKER};

/// Describes one split operation: enough to locate every chunk,
/// rebuild the original file, and verify the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRecord {
    pub original_name: String,
    pub num_chunks: u64,
    pub original_size: u64,
    pub chunk_size: u64,
    /// Lowercase hex SHA-256 of the full original file.
    pub sha256: String,
}

/// Width of the zero-padded chunk index for a set of `num_chunks` chunks.
/// Sets of up to 1000 chunks keep the classic 3-digit `part000` names;
/// larger sets widen uniformly so filenames never collide.
pub fn index_width(num_chunks: u64) -> usize {
    let last = num_chunks.saturating_sub(1);
    let digits = if last == 0 { 1 } else { (last.ilog10() + 1) as usize };
    digits.max(MIN_INDEX_WIDTH)
}

/// Filename of chunk `index` for a file named `base_name`,
/// e.g. `data.bin.part007`.
pub fn chunk_file_name(base_name: &str, index: u64, width: usize) -> String {
    format!("{}{}{:0width$}", base_name, PART_MARKER, index, width = width)
}

impl MetaRecord {
    pub fn index_width(&self) -> usize {
        index_width(self.num_chunks)
    }

    pub fn chunk_file_name(&self, index: u64) -> String {
        chunk_file_name(&self.original_name, index, self.index_width())
    }

    /// Serialize to the canonical `key=value` text format,
    /// one entry per line, newline-terminated.
    pub fn encode(&self) -> String {
        format!(
            "original_name={}\nnum_chunks={}\noriginal_size={}\nchunk_size={}\nsha256={}\n",
            self.original_name, self.num_chunks, self.original_size, self.chunk_size, self.sha256
        )
    }

    /// Parse the text format back into a record. Every key is required,
    /// duplicates and unknown keys are rejected, numeric values must be
    /// non-negative integers.
    pub fn decode(text: &str) -> Result<Self> {
        let mut original_name: Option<String> = None;
        let mut num_chunks: Option<u64> = None;
        let mut original_size: Option<u64> = None;
        let mut chunk_size: Option<u64> = None;
        let mut sha256: Option<String> = None;

        for line in text.lines() {
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| Error::Format(format!("bad line: {:?}", line)))?;

            match key {
                "original_name" => set_string(&mut original_name, key, value)?,
                "num_chunks" => set_number(&mut num_chunks, key, value)?,
                "original_size" => set_number(&mut original_size, key, value)?,
                "chunk_size" => set_number(&mut chunk_size, key, value)?,
                "sha256" => set_string(&mut sha256, key, value)?,
                _ => return Err(Error::Format(format!("unknown key: {}", key))),
            }
        }

        let record = MetaRecord {
            original_name: original_name.ok_or_else(|| missing("original_name"))?,
            num_chunks: num_chunks.ok_or_else(|| missing("num_chunks"))?,
            original_size: original_size.ok_or_else(|| missing("original_size"))?,
            chunk_size: chunk_size.ok_or_else(|| missing("chunk_size"))?,
            sha256: sha256.ok_or_else(|| missing("sha256"))?,
        };

        if record.original_name.is_empty() {
            return Err(Error::Format("original_name is empty".to_string()));
        }
        if record.sha256.is_empty() {
            return Err(Error::Format("sha256 is empty".to_string()));
        }

        Ok(record)
    }
}

fn missing(key: &str) -> Error {
    Error::Format(format!("missing key: {}", key))
}

fn set_string(slot: &mut Option<String>, key: &str, value: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::Format(format!("duplicate key: {}", key)));
    }
    *slot = Some(value.to_string());
    Ok(())
}

fn set_number(slot: &mut Option<u64>, key: &str, value: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::Format(format!("duplicate key: {}", key)));
    }
    let parsed = value
        .parse::<u64>()
        .map_err(|_| Error::Format(format!("{} is not a non-negative integer: {:?}", key, value)))?;
    *slot = Some(parsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetaRecord {
        MetaRecord {
            original_name: "video.mkv".to_string(),
            num_chunks: 3,
            original_size: 131_072_000,
            chunk_size: 52_428_800,
            sha256: "ab".repeat(32),
        }
    }

    #[test]
    fn test_encode_canonical_order() {
        let text = sample().encode();
        let expected = format!(
            "original_name=video.mkv\nnum_chunks=3\noriginal_size=131072000\nchunk_size=52428800\nsha256={}\n",
            "ab".repeat(32)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_decode_round_trip() {
        let record = sample();
        let decoded = MetaRecord::decode(&record.encode()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_order_independent() {
        let text = "sha256=deadbeef\nchunk_size=4\noriginal_size=10\nnum_chunks=3\noriginal_name=a.bin\n";
        let record = MetaRecord::decode(text).unwrap();
        assert_eq!(record.original_name, "a.bin");
        assert_eq!(record.num_chunks, 3);
    }

    #[test]
    fn test_decode_missing_key() {
        let text = "original_name=a.bin\nnum_chunks=1\noriginal_size=10\nchunk_size=10\n";
        match MetaRecord::decode(text) {
            Err(Error::Format(msg)) => assert!(msg.contains("sha256")),
            other => panic!("expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_bad_line() {
        let text = "original_name=a.bin\nnot a key value pair\n";
        assert!(matches!(MetaRecord::decode(text), Err(Error::Format(_))));
    }

    #[test]
    fn test_decode_non_numeric_value() {
        let text = sample().encode().replace("num_chunks=3", "num_chunks=three");
        assert!(matches!(MetaRecord::decode(&text), Err(Error::Format(_))));
    }

    #[test]
    fn test_decode_negative_value() {
        let text = sample().encode().replace("num_chunks=3", "num_chunks=-3");
        assert!(matches!(MetaRecord::decode(&text), Err(Error::Format(_))));
    }

    #[test]
    fn test_decode_duplicate_key() {
        let mut text = sample().encode();
        text.push_str("num_chunks=4\n");
        assert!(matches!(MetaRecord::decode(&text), Err(Error::Format(_))));
    }

    #[test]
    fn test_decode_unknown_key() {
        let mut text = sample().encode();
        text.push_str("compression=zstd\n");
        assert!(matches!(MetaRecord::decode(&text), Err(Error::Format(_))));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let text = sample().encode().replace("video.mkv", "a=b.bin");
        let record = MetaRecord::decode(&text).unwrap();
        assert_eq!(record.original_name, "a=b.bin");
    }

    #[test]
    fn test_index_width() {
        assert_eq!(index_width(0), 3);
        assert_eq!(index_width(1), 3);
        assert_eq!(index_width(999), 3);
        assert_eq!(index_width(1000), 3);
        assert_eq!(index_width(1001), 4);
        assert_eq!(index_width(10_000), 4);
        assert_eq!(index_width(10_001), 5);
    }

    #[test]
    fn test_chunk_file_name() {
        assert_eq!(chunk_file_name("a.bin", 0, 3), "a.bin.part000");
        assert_eq!(chunk_file_name("a.bin", 42, 3), "a.bin.part042");
        assert_eq!(chunk_file_name("a.bin", 1234, 4), "a.bin.part1234");
    }

    #[test]
    fn test_record_chunk_file_name_uses_own_width() {
        let mut record = sample();
        record.num_chunks = 2500;
        assert_eq!(record.chunk_file_name(7), "video.mkv.part0007");
    }
}
