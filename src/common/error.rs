// Error types and error handling

use std::io;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    FileNotFound(String),
    DirNotFound(String),
    MetaNotFound(String),
    MultipleMeta { dir: String, found: Vec<String> },
    MissingChunks(Vec<String>),
    Format(String),
    InvalidChunkSize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::FileNotFound(path) => write!(f, "File not found: {}", path),
            Error::DirNotFound(path) => write!(f, "Folder not found: {}", path),
            Error::MetaNotFound(dir) => write!(f, "No metadata file found in: {}", dir),
            Error::MultipleMeta { dir, found } => {
                write!(f, "Multiple metadata files in {}: {}", dir, found.join(", "))
            }
            Error::MissingChunks(names) => {
                writeln!(f, "Missing chunk files:")?;
                for name in names {
                    writeln!(f, "  - {}", name)?;
                }
                Ok(())
            }
            Error::Format(e) => write!(f, "Invalid metadata: {}", e),
            Error::InvalidChunkSize => write!(f, "Invalid chunk size"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
