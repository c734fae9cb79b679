use std::io;
use std::path::PathBuf;

/// Errors raised while reading a generator input or writing its output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input path has no file name to derive a constant name from.
    #[error("cannot derive a constant name from {}", path.display())]
    BadFileName { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
