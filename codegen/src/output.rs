//! File plumbing shared by both generators.
//!
//! Every handle is opened for exactly one read or one write and dropped
//! before returning. Writes truncate; there is no temp-file rename, so a
//! failure mid-write can leave a partial file behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Read a whole input file as raw bytes.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `path` and stream into it through `emit`, flushing before the
/// handle is dropped so buffered write errors are not lost.
pub fn write_with<F>(path: &Path, emit: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let wrap = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let f = fs::File::create(path).map_err(wrap)?;
    let mut bw = BufWriter::new(f);
    emit(&mut bw).map_err(wrap)?;
    bw.flush().map_err(wrap)
}
